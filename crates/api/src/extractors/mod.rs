//! Request validation extractors.
//!
//! Handlers list an identifier extractor before any body extractor. axum runs
//! parts extractors in argument order and the body extractor last, so a
//! payload is never inspected for a target that does not exist.

mod filter_query;
mod valid_id;
mod validated_body;

pub use filter_query::FilterQuery;
pub use valid_id::{ValidPostId, ValidUserId};
pub use validated_body::{ObjectBody, ResourceBody, ValidatedBody};

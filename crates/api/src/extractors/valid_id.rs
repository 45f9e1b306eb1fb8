//! Path identifier extractors that only succeed for existing records.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use common::{AppError, AppResult, ResultExt};
use domain::Resource;

use crate::state::AppState;

/// `:id` of a user known to exist at extraction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidUserId(pub i32);

/// `:id` of a post known to exist at extraction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidPostId(pub i32);

#[async_trait]
impl FromRequestParts<AppState> for ValidUserId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> AppResult<Self> {
        existing_id(parts, state, Resource::User).await.map(Self)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for ValidPostId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> AppResult<Self> {
        existing_id(parts, state, Resource::Post).await.map(Self)
    }
}

/// Resolve `:id` and confirm the record exists.
///
/// An id that does not parse cannot name a record, so it is rejected like a
/// missing one without a storage round trip.
async fn existing_id(parts: &mut Parts, state: &AppState, resource: Resource) -> AppResult<i32> {
    let invalid = || AppError::validation(resource.invalid_id_message());

    let Path(raw) = Path::<String>::from_request_parts(parts, state)
        .await
        .map_err(|_| invalid())?;
    let id: i32 = raw.parse().map_err(|_| invalid())?;

    let exists = state
        .exists(resource, id)
        .await
        .context(resource.id_lookup_failed_message())?;

    if exists {
        tracing::debug!(%resource, id, "identifier validated");
        Ok(id)
    } else {
        Err(invalid())
    }
}

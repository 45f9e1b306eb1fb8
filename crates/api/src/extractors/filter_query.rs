//! Query string extractor answering with the API's JSON error body.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use common::AppError;

/// `Query<T>` whose rejection is an [`AppError`].
#[derive(Debug, Clone, Default)]
pub struct FilterQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for FilterQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(FilterQuery(value))
    }
}

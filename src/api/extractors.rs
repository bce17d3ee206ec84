//! Custom Axum extractors
//!
//! Both wrap an axum extractor and turn its rejection into an [`ApiError`], so a bad
//! id or body gets the same JSON error shape as a domain failure.

use super::error::ApiError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Extract and validate a UUID from path
pub struct ValidUuid(pub Uuid);

impl<S> FromRequestParts<S> for ValidUuid
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state).await?;

        let uuid = Uuid::parse_str(&id)
            .map_err(|_| ApiError::BadRequest(format!("Invalid id '{id}': expected a UUID")))?;

        Ok(Self(uuid))
    }
}

/// JSON request body; malformed or incomplete bodies are a 400
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

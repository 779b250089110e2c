use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use tracing::warn;

/// `axum::extract::Path` whose client-side rejections use the `ErrorResponse` body.
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) if rejection.status().is_server_error() => {
                Err(rejection.into_response())
            }
            Err(rejection) => {
                warn!("⚠️ Rejected path parameter: {}", rejection.body_text());
                Err(HttpError::BadRequest(format!(
                    "Invalid path parameter: {}",
                    rejection.body_text()
                ))
                .into_response())
            }
        }
    }
}

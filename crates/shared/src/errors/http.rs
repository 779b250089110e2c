use crate::errors::{
    error::{ErrorResponse, FieldViolation},
    repository::RepositoryError,
    service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::collections::BTreeMap;
use tracing::error;

pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Validation(Vec<FieldViolation>),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(violations) => HttpError::Validation(violations),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Conflict(msg) => {
                error!("⚠️ Concurrent modification: {msg}");
                HttpError::Conflict("The record was modified concurrently, please retry".into())
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                other => {
                    error!("❌ Repository failure: {other}");
                    HttpError::Internal(INTERNAL_ERROR_MESSAGE.into())
                }
            },

            ServiceError::Internal(msg) => {
                error!("❌ Internal service failure: {msg}");
                HttpError::Internal(INTERNAL_ERROR_MESSAGE.into())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg, errors) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            HttpError::Validation(violations) => {
                let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();
                for violation in violations {
                    fields
                        .entry(violation.field)
                        .or_default()
                        .push(violation.message);
                }
                (
                    StatusCode::BAD_REQUEST,
                    "Validation failed".to_string(),
                    Some(fields),
                )
            }
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
            errors,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_detail_is_not_leaked() {
        let err = ServiceError::Repo(RepositoryError::Custom("disk I/O error at /var/db".into()));
        match HttpError::from(err) {
            HttpError::Internal(msg) => assert_eq!(msg, INTERNAL_ERROR_MESSAGE),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn storage_lock_outside_update_is_internal() {
        let err = ServiceError::Repo(RepositoryError::Conflict("database is locked".into()));
        match HttpError::from(err) {
            HttpError::Internal(msg) => assert_eq!(msg, INTERNAL_ERROR_MESSAGE),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn maps_taxonomy_to_status_codes() {
        let cases = [
            (
                ServiceError::Validation(vec![FieldViolation::new("name", "Name is required")]),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::NotFound("Product with id 3 not found".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                ServiceError::Conflict("Product with id 3 was modified concurrently".into()),
                StatusCode::CONFLICT,
            ),
            (
                ServiceError::Repo(RepositoryError::Conflict("database is locked".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServiceError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = HttpError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fxdash_core::errors::{Error as CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Core(CoreError::Validation(err))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e @ CoreError::Validation(_)) => (StatusCode::BAD_REQUEST, e.to_string()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err: ApiError = ValidationError::InvalidDate("2024-1-5".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Input validation failed: Invalid date '2024-1-5', expected YYYY-MM-DD"
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

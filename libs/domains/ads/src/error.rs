use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdError {
    #[error("ad not found: {0}")]
    NotFound(i64),

    #[error("ad id space exhausted")]
    IdOverflow,

    #[error("title must be between 1 and 100 characters")]
    BadTitle,

    #[error("text must be between 1 and 500 characters")]
    BadText,

    #[error("user {caller} is not the author of this ad")]
    BadAuthorId { owner: i64, caller: i64 },
}

pub type AdResult<T> = Result<T, AdError>;

impl From<idgen::IdOverflow> for AdError {
    fn from(_: idgen::IdOverflow) -> Self {
        AdError::IdOverflow
    }
}

/// Convert AdError to AppError for standardized error responses
impl From<AdError> for AppError {
    fn from(err: AdError) -> Self {
        match err {
            AdError::NotFound(id) => AppError::NotFound(format!("Ad {} not found", id)),
            AdError::IdOverflow => {
                AppError::InternalServerError("Ad id space exhausted".to_string())
            }
            err @ (AdError::BadTitle | AdError::BadText) => AppError::BadRequest(err.to_string()),
            err @ AdError::BadAuthorId { .. } => AppError::Forbidden(err.to_string()),
        }
    }
}

impl IntoResponse for AdError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Status mapping for the gRPC surface
impl From<AdError> for tonic::Status {
    fn from(err: AdError) -> Self {
        match err {
            AdError::NotFound(_) => tonic::Status::not_found(err.to_string()),
            AdError::IdOverflow => tonic::Status::internal(err.to_string()),
            AdError::BadTitle | AdError::BadText => {
                tonic::Status::invalid_argument(err.to_string())
            }
            AdError::BadAuthorId { .. } => tonic::Status::permission_denied(err.to_string()),
        }
    }
}

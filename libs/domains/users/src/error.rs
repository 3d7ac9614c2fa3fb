use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("user not found: {0}")]
    NotFound(i64),

    #[error("user id space exhausted")]
    IdOverflow,
}

pub type UserResult<T> = Result<T, UserError>;

impl From<idgen::IdOverflow> for UserError {
    fn from(_: idgen::IdOverflow) -> Self {
        UserError::IdOverflow
    }
}

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User {} not found", id)),
            UserError::IdOverflow => {
                AppError::InternalServerError("User id space exhausted".to_string())
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Status mapping for the gRPC surface
impl From<UserError> for tonic::Status {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => tonic::Status::not_found(err.to_string()),
            UserError::IdOverflow => tonic::Status::internal(err.to_string()),
        }
    }
}

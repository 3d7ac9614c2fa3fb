//! Fallback handlers shared by all routers.

use axum::http::{StatusCode, Uri};
use axum::response::Response;

use super::{error_response, ErrorCode};

/// 404 fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("No route for {}", uri.path()),
        ErrorCode::NotFound,
    )
}

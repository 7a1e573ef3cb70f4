//! Responses for requests that match no handler.

use axum::http::Uri;

use crate::error::AppError;

/// Unknown path.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

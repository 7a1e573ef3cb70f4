//! Route definitions for questions.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::question;
use crate::state::AppState;

/// Routes mounted at `/questions`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(question::list).post(question::create))
        .route("/{id}", delete(question::delete))
}

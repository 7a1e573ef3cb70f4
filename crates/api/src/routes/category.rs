//! Route definitions for categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::{category, search};
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET /                  -> list
/// GET /{id}/questions    -> search::by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list))
        .route("/{id}/questions", get(search::by_category))
}

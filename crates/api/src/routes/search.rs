use axum::routing::post;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// `POST /searchterms`.
pub fn router() -> Router<AppState> {
    Router::new().route("/searchterms", post(search::by_term))
}

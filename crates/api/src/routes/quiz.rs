use axum::routing::post;
use axum::Router;

use crate::handlers::quiz;
use crate::state::AppState;

/// `POST /quizzes`.
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(quiz::next_question))
}

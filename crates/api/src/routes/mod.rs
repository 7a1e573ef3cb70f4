pub mod category;
pub mod health;
pub mod question;
pub mod quiz;
pub mod search;

use axum::Router;

use crate::state::AppState;

/// Build the trivia route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                        list categories (GET)
/// /categories/{id}/questions         questions in a category (GET, ?page=)
///
/// /questions                         list (GET, ?page=), create (POST)
/// /questions/{id}                    delete (DELETE)
///
/// /searchterms                       search by term (POST, ?page=)
///
/// /quizzes                           next quiz question (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/questions", question::router())
        .merge(search::router())
        .merge(quiz::router())
}

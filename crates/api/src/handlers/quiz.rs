//! Handler for `POST /quizzes`: the next random, unseen question.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use trivia_core::error::CoreError;
use trivia_core::quiz::{pick_unseen, QuizRequest};
use trivia_db::models::question::Question;
use trivia_db::repositories::QuestionRepo;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuizQuestion {
    pub question: Question,
}

/// POST /quizzes
///
/// Draws uniformly from the selected category (id 0 = all categories),
/// excluding `previous_questions`. A 404 means the quiz is exhausted.
pub async fn next_question(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let selector = input.quiz_category.id;
    let candidates = QuestionRepo::list_candidates(&state.pool, selector).await?;
    let pool_size = candidates.len();

    let question = pick_unseen(candidates, &input.previous_questions, &mut rand::rng())
        .ok_or(CoreError::NoResults("quiz candidates"))?;

    tracing::debug!(
        ?selector,
        pool_size,
        seen = input.previous_questions.len(),
        question_id = question.id,
        "Picked quiz question",
    );

    Ok(Json(Envelope::ok(QuizQuestion { question })))
}

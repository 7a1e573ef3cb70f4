//! Handlers for the `/questions` resource.
//!
//! Questions are listed a page at a time, created from the add-question
//! form, and deleted by id. They are never updated in place.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use trivia_core::error::CoreError;
use trivia_core::pagination::distinct_categories;
use trivia_core::question::QuestionSubmission;
use trivia_core::types::DbId;
use trivia_db::models::category::category_map;
use trivia_db::models::question::Question;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::query::PageParams;
use crate::response::{Empty, Envelope};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    /// Distinct category ids on this page.
    pub current_category: Vec<DbId>,
    pub categories: BTreeMap<DbId, String>,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /questions?page=N
///
/// One page of all questions plus the category map. A page with no
/// questions is a 404.
pub async fn list(
    State(state): State<AppState>,
    params: PageParams,
) -> AppResult<impl IntoResponse> {
    let page = params.page();
    let questions = QuestionRepo::list_page(&state.pool, page).await?;
    if questions.is_empty() {
        return Err(CoreError::NoResults("questions page").into());
    }

    let total_questions = QuestionRepo::count(&state.pool).await?;
    let categories = CategoryRepo::list(&state.pool).await?;

    tracing::debug!(
        page = page.number(),
        returned = questions.len(),
        total_questions,
        "Listed questions",
    );

    Ok(Json(Envelope::ok(QuestionPage {
        current_category: distinct_categories(&questions),
        questions,
        total_questions,
        categories: category_map(categories),
    })))
}

/// POST /questions
///
/// Create a question. Every field must be non-blank; `difficulty` and
/// `category` must be integers. The response is the bare envelope.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<QuestionSubmission>,
) -> AppResult<impl IntoResponse> {
    let input = submission.into_new_question()?;
    let question = QuestionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        question_id = question.id,
        category = question.category,
        "Question created",
    );

    Ok(Json(Envelope::ok(Empty::default())))
}

/// DELETE /questions/{id}
///
/// Looks the question up first; an unknown id is a 404. A row removed by a
/// concurrent delete between the lookup and the delete is also a 404.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let not_found = || CoreError::NotFound {
        entity: "Question",
        id,
    };

    let question = QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;

    if !QuestionRepo::delete(&state.pool, question.id).await? {
        tracing::warn!(question_id = id, "Question vanished before it could be deleted");
        return Err(not_found().into());
    }

    tracing::info!(question_id = id, "Question deleted");

    Ok(Json(Envelope::ok(Deleted { deleted: id })))
}

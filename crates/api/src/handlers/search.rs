//! Handlers for filtered question listings: by search term and by category.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use trivia_core::error::CoreError;
use trivia_core::pagination::distinct_categories;
use trivia_core::types::DbId;
use trivia_db::models::question::Question;
use trivia_db::repositories::QuestionRepo;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::query::PageParams;
use crate::response::Envelope;
use crate::state::AppState;

/// Request body for `POST /searchterms`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Substring to look for. An empty term matches every question.
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}

#[derive(Debug, Serialize)]
pub struct FilteredQuestions {
    pub questions: Vec<Question>,
    /// Number of matches before pagination.
    pub total_questions: i64,
    pub current_category: Vec<DbId>,
}

impl FilteredQuestions {
    fn new(questions: Vec<Question>, total_questions: i64) -> Self {
        Self {
            current_category: distinct_categories(&questions),
            questions,
            total_questions,
        }
    }
}

/// POST /searchterms?page=N
///
/// Questions whose text contains `searchTerm`, ignoring case.
pub async fn by_term(
    State(state): State<AppState>,
    params: PageParams,
    ApiJson(input): ApiJson<SearchRequest>,
) -> AppResult<impl IntoResponse> {
    let page = params.page();
    let questions = QuestionRepo::search_page(&state.pool, &input.search_term, page).await?;
    if questions.is_empty() {
        return Err(CoreError::NoResults("search results").into());
    }

    let total = QuestionRepo::count_matching(&state.pool, &input.search_term).await?;
    tracing::debug!(
        term = %input.search_term,
        page = page.number(),
        total,
        "Searched questions",
    );

    Ok(Json(Envelope::ok(FilteredQuestions::new(questions, total))))
}

/// GET /categories/{id}/questions?page=N
///
/// Questions in one category. An unknown category simply has no questions.
pub async fn by_category(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<DbId>,
    params: PageParams,
) -> AppResult<impl IntoResponse> {
    let page = params.page();
    let questions = QuestionRepo::list_page_by_category(&state.pool, category_id, page).await?;
    if questions.is_empty() {
        return Err(CoreError::NoResults("category questions").into());
    }

    let total = QuestionRepo::count_by_category(&state.pool, category_id).await?;
    tracing::debug!(category_id, page = page.number(), total, "Listed category questions");

    Ok(Json(Envelope::ok(FilteredQuestions::new(questions, total))))
}

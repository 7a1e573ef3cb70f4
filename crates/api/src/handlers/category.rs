//! Handlers for the `/categories` resource.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use trivia_core::error::CoreError;
use trivia_core::types::DbId;
use trivia_db::models::category::category_map;
use trivia_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: BTreeMap<DbId, String>,
    pub total_categories: usize,
}

/// GET /categories
///
/// All categories as an id -> name map. An empty table is a 404.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    if categories.is_empty() {
        return Err(CoreError::NoResults("categories").into());
    }

    let total_categories = categories.len();
    Ok(Json(Envelope::ok(CategoryList {
        categories: category_map(categories),
        total_categories,
    })))
}

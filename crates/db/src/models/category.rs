use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;
use trivia_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    /// Display name, e.g. "Science".
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Categories keyed by id, the shape clients receive.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<DbId, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

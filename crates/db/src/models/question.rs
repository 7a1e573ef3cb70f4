//! Question row model.
//!
//! Creation input is [`trivia_core::question::NewQuestion`], produced by
//! validating a client submission.

use serde::Serialize;
use sqlx::FromRow;
use trivia_core::pagination::Categorized;
use trivia_core::quiz::Identified;
use trivia_core::types::DbId;

/// A row from the `questions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

impl Categorized for Question {
    fn category_id(&self) -> DbId {
        self.category
    }
}

impl Identified for Question {
    fn id(&self) -> DbId {
        self.id
    }
}

//! Quiz question selection.
//!
//! A quiz walks through a category (or every category) one random question
//! at a time, never repeating a question the player has already seen.

use rand::Rng;
use serde::Deserialize;

use crate::types::DbId;

/// Selector id meaning "every category".
pub const ALL_CATEGORIES: DbId = 0;

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawId")]
pub enum CategorySelector {
    All,
    Category(DbId),
}

impl CategorySelector {
    pub fn from_id(id: DbId) -> Self {
        if id == ALL_CATEGORIES {
            CategorySelector::All
        } else {
            CategorySelector::Category(id)
        }
    }
}

/// Web clients send the selected category's id as a number or as a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(DbId),
    Str(String),
}

impl TryFrom<RawId> for CategorySelector {
    type Error = String;

    fn try_from(raw: RawId) -> Result<Self, Self::Error> {
        let id = match raw {
            RawId::Int(id) => id,
            RawId::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("invalid quiz category id: {s:?}"))?,
        };
        Ok(CategorySelector::from_id(id))
    }
}

/// The `quiz_category` object. Only `id` is meaningful; the display
/// `type` the client echoes back is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: CategorySelector,
}

/// Request body for `POST /quizzes`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    pub quiz_category: QuizCategory,
}

/// Anything with a stable id a quiz can remember having shown.
pub trait Identified {
    fn id(&self) -> DbId;
}

/// Pick one candidate uniformly at random, skipping ids already seen.
///
/// Returns `None` when every candidate has been seen (or there were none).
pub fn pick_unseen<T, R>(candidates: Vec<T>, previous: &[DbId], rng: &mut R) -> Option<T>
where
    T: Identified,
    R: Rng,
{
    let mut remaining: Vec<T> = candidates
        .into_iter()
        .filter(|c| !previous.contains(&c.id()))
        .collect();

    if remaining.is_empty() {
        return None;
    }
    let index = rng.random_range(0..remaining.len());
    Some(remaining.swap_remove(index))
}

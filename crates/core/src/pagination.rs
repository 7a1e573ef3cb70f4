//! Fixed-size page windows over ordered question sets.
//!
//! Every listing endpoint pages by [`QUESTIONS_PER_PAGE`] using a 1-based
//! `?page=` query parameter. There is no upper bound on the page number: a
//! page past the end is simply empty, and callers treat an empty page as
//! "not found".

use std::collections::BTreeSet;

use crate::types::DbId;

/// Number of questions in one page.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Default for Page {
    fn default() -> Self {
        Page(1)
    }
}

impl Page {
    pub fn new(number: i64) -> Self {
        Page(number)
    }

    /// Parse the raw `page` query value.
    ///
    /// Missing or non-integer input falls back to page 1, so a malformed
    /// page parameter never fails a request on its own.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(Page)
            .unwrap_or_default()
    }

    pub fn number(self) -> i64 {
        self.0
    }

    /// Whether this page can contain any rows at all.
    pub fn is_in_range(self) -> bool {
        self.0 >= 1
    }

    /// Row offset of the first item on this page.
    pub fn offset(self) -> i64 {
        (self.0.max(1) - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }

    pub fn limit(self) -> i64 {
        if self.is_in_range() {
            QUESTIONS_PER_PAGE
        } else {
            0
        }
    }
}

/// Anything that belongs to a category.
pub trait Categorized {
    fn category_id(&self) -> DbId;
}

/// Distinct category ids present in `items`, ascending.
pub fn distinct_categories<T: Categorized>(items: &[T]) -> Vec<DbId> {
    items
        .iter()
        .map(Categorized::category_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

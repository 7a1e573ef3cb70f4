//! Repository for the `questions` table.
//!
//! Paged reads order by id and use `LIMIT/OFFSET` from a
//! [`Page`]; the matching `count_*` method gives the unpaginated total.

use sqlx::PgPool;
use trivia_core::pagination::Page;
use trivia_core::question::NewQuestion;
use trivia_core::quiz::CategorySelector;
use trivia_core::types::DbId;

use crate::models::question::Question;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Provides reads and writes for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// Find a question by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a question by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// One page of all questions.
    pub async fn list_page(pool: &PgPool, page: Page) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Question>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Total number of questions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await
    }

    /// One page of questions whose text contains `term`, ignoring case.
    pub async fn search_page(
        pool: &PgPool,
        term: &str,
        page: Page,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions WHERE question ILIKE $1 \
             ORDER BY id LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(contains_pattern(term))
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Number of questions whose text contains `term`, ignoring case.
    pub async fn count_matching(pool: &PgPool, term: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE question ILIKE $1")
            .bind(contains_pattern(term))
            .fetch_one(pool)
            .await
    }

    /// One page of questions in a category.
    pub async fn list_page_by_category(
        pool: &PgPool,
        category_id: DbId,
        page: Page,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions WHERE category = $1 \
             ORDER BY id LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Number of questions in a category.
    pub async fn count_by_category(pool: &PgPool, category_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE category = $1")
            .bind(category_id)
            .fetch_one(pool)
            .await
    }

    /// Every question a quiz over `selector` may draw from, ordered by id.
    pub async fn list_candidates(
        pool: &PgPool,
        selector: CategorySelector,
    ) -> Result<Vec<Question>, sqlx::Error> {
        match selector {
            CategorySelector::All => {
                let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
                sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
            }
            CategorySelector::Category(category_id) => {
                let query =
                    format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id");
                sqlx::query_as::<_, Question>(&query)
                    .bind(category_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }
}

/// Build an `ILIKE` pattern matching `term` literally anywhere in the text.
fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::Category;

const COLUMNS: &str = "id, type";

/// Read access to categories. The API never writes them.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }
}

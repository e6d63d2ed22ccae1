//! Repository for the `messages` table.

use folio_core::models::NewMessage;
use folio_core::types::DbId;
use sqlx::PgPool;

use super::rows::MessageRow;

const COLUMNS: &str = "id, date, name, email, message, is_read";

pub struct MessageRepo;

impl MessageRepo {
    /// All messages, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MessageRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages ORDER BY date DESC, id DESC");
        sqlx::query_as::<_, MessageRow>(&query).fetch_all(pool).await
    }

    /// Insert a message. `date` and `is_read` take their column defaults.
    pub async fn create(pool: &PgPool, new: &NewMessage) -> Result<MessageRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (name, email, message) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MessageRow>(&query)
            .bind(&new.name)
            .bind(&new.email)
            .bind(&new.message)
            .fetch_one(pool)
            .await
    }

    pub async fn set_read(
        pool: &PgPool,
        id: DbId,
        is_read: bool,
    ) -> Result<Option<MessageRow>, sqlx::Error> {
        let query = format!("UPDATE messages SET is_read = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, MessageRow>(&query)
            .bind(id)
            .bind(is_read)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

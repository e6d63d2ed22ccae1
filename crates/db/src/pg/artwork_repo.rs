//! Repository for the `artworks` table.

use folio_core::models::{NewArtwork, UpdateArtwork};
use folio_core::types::DbId;
use sqlx::PgPool;

use super::rows::ArtworkRow;

const COLUMNS: &str = "id, title, category, status, image";

pub struct ArtworkRepo;

impl ArtworkRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<ArtworkRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artworks ORDER BY id");
        sqlx::query_as::<_, ArtworkRow>(&query).fetch_all(pool).await
    }

    pub async fn create(pool: &PgPool, new: &NewArtwork) -> Result<ArtworkRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO artworks (title, category, status, image) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArtworkRow>(&query)
            .bind(&new.title)
            .bind(new.category.as_str())
            .bind(new.status.as_str())
            .bind(&new.image)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &UpdateArtwork,
    ) -> Result<Option<ArtworkRow>, sqlx::Error> {
        let query = format!(
            "UPDATE artworks SET \
                title = COALESCE($2, title), \
                category = COALESCE($3, category), \
                status = COALESCE($4, status), \
                image = COALESCE($5, image), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArtworkRow>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(patch.category.map(|c| c.as_str()))
            .bind(patch.status.map(|s| s.as_str()))
            .bind(&patch.image)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

//! Repository for the single-row `settings` table.
//!
//! The row is keyed by `id = 1`. It is seeded by the migration and
//! re-inserted with defaults if it has gone missing.

use folio_core::models::{Settings, SettingsPatch};
use sqlx::PgPool;

use super::rows::SettingsRow;

const COLUMNS: &str = "name, role, bio, email, github, linkedin, instagram";

pub struct SettingsRepo;

impl SettingsRepo {
    async fn ensure_row(pool: &PgPool) -> Result<(), sqlx::Error> {
        let seed = Settings::default();
        let query = format!(
            "INSERT INTO settings (id, {COLUMNS}) \
             VALUES (1, $1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (id) DO NOTHING"
        );
        sqlx::query(&query)
            .bind(&seed.name)
            .bind(&seed.role)
            .bind(&seed.bio)
            .bind(&seed.email)
            .bind(&seed.github)
            .bind(&seed.linkedin)
            .bind(&seed.instagram)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn get(pool: &PgPool) -> Result<SettingsRow, sqlx::Error> {
        Self::ensure_row(pool).await?;
        let query = format!("SELECT {COLUMNS} FROM settings WHERE id = 1");
        sqlx::query_as::<_, SettingsRow>(&query).fetch_one(pool).await
    }

    /// Merge the non-`None` fields of `patch` into the row.
    pub async fn update(pool: &PgPool, patch: &SettingsPatch) -> Result<SettingsRow, sqlx::Error> {
        Self::ensure_row(pool).await?;
        let query = format!(
            "UPDATE settings SET \
                name = COALESCE($1, name), \
                role = COALESCE($2, role), \
                bio = COALESCE($3, bio), \
                email = COALESCE($4, email), \
                github = COALESCE($5, github), \
                linkedin = COALESCE($6, linkedin), \
                instagram = COALESCE($7, instagram), \
                updated_at = NOW() \
             WHERE id = 1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SettingsRow>(&query)
            .bind(&patch.name)
            .bind(&patch.role)
            .bind(&patch.bio)
            .bind(&patch.email)
            .bind(&patch.github)
            .bind(&patch.linkedin)
            .bind(&patch.instagram)
            .fetch_one(pool)
            .await
    }
}

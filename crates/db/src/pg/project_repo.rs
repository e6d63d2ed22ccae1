//! Repository for the `projects` table.

use folio_core::models::{NewProject, UpdateProject};
use folio_core::types::DbId;
use sqlx::PgPool;

use super::rows::ProjectRow;

/// Column list for `projects` SELECT queries.
const COLUMNS: &str = "\
    id, title, category, description, tech_stack, live_url, repo_url, status, image";

/// Column list for INSERT (excludes the generated `id`).
const INSERT_COLUMNS: &str = "\
    title, category, description, tech_stack, live_url, repo_url, status, image";

pub struct ProjectRepo;

impl ProjectRepo {
    /// All projects in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, ProjectRow>(&query).fetch_all(pool).await
    }

    pub async fn create(pool: &PgPool, new: &NewProject) -> Result<ProjectRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects ({INSERT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&new.title)
            .bind(new.category.as_str())
            .bind(&new.description)
            .bind(&new.tech_stack)
            .bind(&new.live_url)
            .bind(&new.repo_url)
            .bind(new.status.as_str())
            .bind(&new.image)
            .fetch_one(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `patch` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &UpdateProject,
    ) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                title = COALESCE($2, title), \
                category = COALESCE($3, category), \
                description = COALESCE($4, description), \
                tech_stack = COALESCE($5, tech_stack), \
                live_url = COALESCE($6, live_url), \
                repo_url = COALESCE($7, repo_url), \
                status = COALESCE($8, status), \
                image = COALESCE($9, image), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(patch.category.map(|c| c.as_str()))
            .bind(&patch.description)
            .bind(&patch.tech_stack)
            .bind(&patch.live_url)
            .bind(&patch.repo_url)
            .bind(patch.status.map(|s| s.as_str()))
            .bind(&patch.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

//! Postgres storage.
//!
//! Repositories follow one shape: a zero-sized struct per table, a
//! `COLUMNS` list, and associated functions taking `&PgPool`. They return
//! raw rows; [`PgStore`] converts rows into domain records and implements
//! the store traits on top of them.

pub mod artwork_repo;
pub mod message_repo;
pub mod project_repo;
pub mod rows;
pub mod settings_repo;

use async_trait::async_trait;
use folio_core::models::{
    Artwork, Collection, Message, NewArtwork, NewMessage, NewProject, Project, Settings,
    SettingsPatch, UpdateArtwork, UpdateMessage, UpdateProject,
};
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::store::{RecordStore, SettingsStore};

pub use artwork_repo::ArtworkRepo;
pub use message_repo::MessageRepo;
pub use project_repo::ProjectRepo;
pub use settings_repo::SettingsRepo;

/// Postgres-backed implementation of every store trait.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn found<T, R>(row: Option<R>, entity: &'static str, id: DbId) -> Result<T, StoreError>
where
    R: TryInto<T, Error = StoreError>,
{
    row.ok_or(StoreError::not_found(entity, id))?.try_into()
}

fn removed(rows_affected: u64, entity: &'static str, id: DbId) -> Result<(), StoreError> {
    if rows_affected == 0 {
        Err(StoreError::not_found(entity, id))
    } else {
        Ok(())
    }
}

#[async_trait]
impl RecordStore<Project> for PgStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        ProjectRepo::list(&self.pool)
            .await?
            .into_iter()
            .map(Project::try_from)
            .collect()
    }

    async fn create(&self, new: NewProject) -> Result<Project, StoreError> {
        ProjectRepo::create(&self.pool, &new).await?.try_into()
    }

    async fn update(&self, id: DbId, patch: UpdateProject) -> Result<Project, StoreError> {
        let row = ProjectRepo::update(&self.pool, id, &patch).await?;
        found(row, Project::ENTITY, id)
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        let affected = ProjectRepo::delete(&self.pool, id).await?;
        removed(affected, Project::ENTITY, id)
    }
}

#[async_trait]
impl RecordStore<Artwork> for PgStore {
    async fn list(&self) -> Result<Vec<Artwork>, StoreError> {
        ArtworkRepo::list(&self.pool)
            .await?
            .into_iter()
            .map(Artwork::try_from)
            .collect()
    }

    async fn create(&self, new: NewArtwork) -> Result<Artwork, StoreError> {
        ArtworkRepo::create(&self.pool, &new).await?.try_into()
    }

    async fn update(&self, id: DbId, patch: UpdateArtwork) -> Result<Artwork, StoreError> {
        let row = ArtworkRepo::update(&self.pool, id, &patch).await?;
        found(row, Artwork::ENTITY, id)
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        let affected = ArtworkRepo::delete(&self.pool, id).await?;
        removed(affected, Artwork::ENTITY, id)
    }
}

#[async_trait]
impl RecordStore<Message> for PgStore {
    async fn list(&self) -> Result<Vec<Message>, StoreError> {
        Ok(MessageRepo::list(&self.pool)
            .await?
            .into_iter()
            .map(Message::from)
            .collect())
    }

    async fn create(&self, new: NewMessage) -> Result<Message, StoreError> {
        Ok(MessageRepo::create(&self.pool, &new).await?.into())
    }

    async fn update(&self, id: DbId, patch: UpdateMessage) -> Result<Message, StoreError> {
        let row = MessageRepo::set_read(&self.pool, id, patch.read_state()).await?;
        row.map(Message::from)
            .ok_or(StoreError::not_found(Message::ENTITY, id))
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        let affected = MessageRepo::delete(&self.pool, id).await?;
        removed(affected, Message::ENTITY, id)
    }
}

#[async_trait]
impl SettingsStore for PgStore {
    async fn get(&self) -> Result<Settings, StoreError> {
        Ok(SettingsRepo::get(&self.pool).await?.into())
    }

    async fn update(&self, patch: SettingsPatch) -> Result<Settings, StoreError> {
        Ok(SettingsRepo::update(&self.pool, &patch).await?.into())
    }
}

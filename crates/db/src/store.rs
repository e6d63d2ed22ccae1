//! Storage traits and the per-deployment store bundle.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use folio_core::models::{Artwork, Collection, Message, Project, Settings, SettingsPatch};
use folio_core::types::DbId;

use crate::error::StoreError;
use crate::file::{JsonFileStore, JsonSettingsStore};
use crate::pg::PgStore;
use crate::DbPool;

/// Durable storage of one collection.
///
/// Implementations must behave identically: ids are assigned on create,
/// updates merge, and missing ids surface as [`StoreError::NotFound`].
#[async_trait]
pub trait RecordStore<C: Collection>: Send + Sync {
    /// All records in the collection's listing order.
    async fn list(&self) -> Result<Vec<C>, StoreError>;

    /// Store a new record, assigning its id (and creation date where the
    /// collection has one).
    async fn create(&self, new: C::New) -> Result<C, StoreError>;

    /// Merge `patch` into the record with `id`.
    async fn update(&self, id: DbId, patch: C::Update) -> Result<C, StoreError>;

    /// Remove the record with `id`.
    async fn delete(&self, id: DbId) -> Result<(), StoreError>;
}

/// Storage of the settings singleton.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// The current settings, seeded with defaults on first access.
    async fn get(&self) -> Result<Settings, StoreError>;

    /// Merge `patch` into the singleton.
    async fn update(&self, patch: SettingsPatch) -> Result<Settings, StoreError>;
}

/// The stores backing one deployment. Cheap to clone.
#[derive(Clone)]
pub struct Stores {
    pub projects: Arc<dyn RecordStore<Project>>,
    pub artworks: Arc<dyn RecordStore<Artwork>>,
    pub messages: Arc<dyn RecordStore<Message>>,
    pub settings: Arc<dyn SettingsStore>,
}

impl Stores {
    /// JSON documents under `data_dir`, one per collection.
    pub fn json_files(data_dir: impl Into<PathBuf>) -> Self {
        let dir = data_dir.into();
        Self {
            projects: Arc::new(JsonFileStore::<Project>::new(&dir)),
            artworks: Arc::new(JsonFileStore::<Artwork>::new(&dir)),
            messages: Arc::new(JsonFileStore::<Message>::new(&dir)),
            settings: Arc::new(JsonSettingsStore::new(&dir)),
        }
    }

    /// Postgres tables reached through `pool`.
    pub fn postgres(pool: DbPool) -> Self {
        let store = Arc::new(PgStore::new(pool));
        Self {
            projects: store.clone(),
            artworks: store.clone(),
            messages: store.clone(),
            settings: store,
        }
    }

    pub fn collection<C: Stored>(&self) -> &Arc<dyn RecordStore<C>> {
        C::store(self)
    }
}

/// Collections that have a store in [`Stores`].
pub trait Stored: Collection {
    fn store(stores: &Stores) -> &Arc<dyn RecordStore<Self>>;
}

impl Stored for Project {
    fn store(stores: &Stores) -> &Arc<dyn RecordStore<Self>> {
        &stores.projects
    }
}

impl Stored for Artwork {
    fn store(stores: &Stores) -> &Arc<dyn RecordStore<Self>> {
        &stores.artworks
    }
}

impl Stored for Message {
    fn store(stores: &Stores) -> &Arc<dyn RecordStore<Self>> {
        &stores.messages
    }
}

//! Whole-document JSON file storage.
//!
//! Each collection lives in `<data_dir>/<key>.json` as a pretty-printed
//! array; settings live in `<data_dir>/settings.json` as an object. Every
//! operation reads the entire document and mutations rewrite it entirely.
//! Writes go to a sibling temp file that is then renamed over the document,
//! so a reader never observes a half-written file. Concurrent writers are
//! not serialized: the last rename wins.

use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use folio_core::ids::next_id;
use folio_core::models::{Collection, Settings, SettingsPatch};
use folio_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::store::{RecordStore, SettingsStore};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One JSON document on disk.
#[derive(Debug, Clone)]
struct JsonDocument {
    path: PathBuf,
    label: &'static str,
}

impl JsonDocument {
    fn new(data_dir: &Path, key: &'static str) -> Self {
        Self {
            path: data_dir.join(format!("{key}.json")),
            label: key,
        }
    }

    /// Read and decode the document, writing `seed` first if it does not exist.
    async fn read_or_seed<T, F>(&self, seed: F) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| {
                tracing::error!(
                    path = %self.path.display(),
                    error = %source,
                    "Malformed JSON document"
                );
                StoreError::Malformed {
                    path: self.path.clone(),
                    source,
                }
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let value = seed();
                self.write(&value).await?;
                tracing::info!(path = %self.path.display(), "Seeded missing JSON document");
                Ok(value)
            }
            Err(source) => Err(self.io_error(source)),
        }
    }

    async fn write<T: Serialize>(&self, value: &T) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        let bytes = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Encode {
            collection: self.label,
            source,
        })?;

        let temp = self.temp_path();
        tokio::fs::write(&temp, &bytes)
            .await
            .map_err(|source| self.io_error(source))?;
        if let Err(source) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(self.io_error(source));
        }
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Wrote JSON document");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(format!(".{}.{n}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// A collection stored as a JSON array document.
pub struct JsonFileStore<C> {
    doc: JsonDocument,
    _collection: PhantomData<fn() -> C>,
}

impl<C: Collection> JsonFileStore<C> {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            doc: JsonDocument::new(data_dir.as_ref(), C::KEY),
            _collection: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.doc.path
    }

    async fn load(&self) -> Result<Vec<C>, StoreError> {
        self.doc.read_or_seed(Vec::new).await
    }
}

#[async_trait]
impl<C: Collection> RecordStore<C> for JsonFileStore<C> {
    async fn list(&self) -> Result<Vec<C>, StoreError> {
        let mut records = self.load().await?;
        C::order(&mut records);
        Ok(records)
    }

    async fn create(&self, new: C::New) -> Result<C, StoreError> {
        let mut records = self.load().await?;
        let now = Utc::now();
        let id = next_id(C::ID_STRATEGY, records.iter().map(C::id), now).ok_or_else(|| {
            StoreError::Corrupt(format!("{}: id space exhausted", self.doc.label))
        })?;
        let record = C::assemble(id, now, new);
        records.push(record.clone());
        self.doc.write(&records).await?;
        Ok(record)
    }

    async fn update(&self, id: DbId, patch: C::Update) -> Result<C, StoreError> {
        let mut records = self.load().await?;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(StoreError::not_found(C::ENTITY, id))?;
        record.apply(&patch);
        let updated = record.clone();
        self.doc.write(&records).await?;
        Ok(updated)
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        let mut records = self.load().await?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(StoreError::not_found(C::ENTITY, id));
        }
        self.doc.write(&records).await
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// The settings singleton stored as a JSON object document.
pub struct JsonSettingsStore {
    doc: JsonDocument,
}

impl JsonSettingsStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            doc: JsonDocument::new(data_dir.as_ref(), "settings"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.doc.path
    }
}

#[async_trait]
impl SettingsStore for JsonSettingsStore {
    async fn get(&self) -> Result<Settings, StoreError> {
        self.doc.read_or_seed(Settings::default).await
    }

    async fn update(&self, patch: SettingsPatch) -> Result<Settings, StoreError> {
        let mut settings = self.get().await?;
        settings.apply(&patch);
        self.doc.write(&settings).await?;
        Ok(settings)
    }
}

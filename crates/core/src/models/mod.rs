//! Record types and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` record struct (camelCase on the wire)
//! - A `Deserialize` create DTO accepted by `POST`
//! - The resolved insert values (`New*`) with every default applied
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod artwork;
pub mod message;
pub mod project;
pub mod settings;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CoreError;
use crate::ids::IdStrategy;
use crate::types::{DbId, Timestamp};

pub use artwork::{Artwork, CreateArtwork, NewArtwork, UpdateArtwork};
pub use message::{CreateMessage, Message, NewMessage, UpdateMessage};
pub use project::{CreateProject, NewProject, Project, UpdateProject};
pub use settings::{Settings, SettingsPatch};

/// A named collection of id-addressed records.
///
/// Both storage backends and the HTTP layer are written once against this
/// trait and instantiated per collection.
pub trait Collection: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection key: URL segment, JSON document stem and table name.
    const KEY: &'static str;
    /// Singular label used in errors and logs.
    const ENTITY: &'static str;
    /// Id assignment used by the file backend.
    const ID_STRATEGY: IdStrategy;

    /// Request body accepted on create.
    type Create: DeserializeOwned + Send + 'static;
    /// Insert values after defaults and validation.
    type New: Clone + Send + Sync + 'static;
    /// Partial patch accepted on update.
    type Update: DeserializeOwned + Send + Sync + 'static;

    /// Apply collection defaults and validate a create request.
    fn resolve(input: Self::Create) -> Result<Self::New, CoreError>;

    /// Build the stored record once the store has assigned an id.
    fn assemble(id: DbId, created_at: Timestamp, new: Self::New) -> Self;

    fn id(&self) -> DbId;

    /// Shallow-merge a patch; fields absent from the patch are untouched.
    fn apply(&mut self, patch: &Self::Update);

    /// Sort records into the collection's listing order. Insertion order by default.
    fn order(records: &mut [Self]) {
        let _ = records;
    }
}

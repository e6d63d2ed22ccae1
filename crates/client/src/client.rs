use std::sync::Arc;

use folio_core::models::{
    Artwork, CreateArtwork, CreateMessage, CreateProject, Message, Project, Settings,
    SettingsPatch, UpdateArtwork, UpdateMessage, UpdateProject,
};
use folio_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::cache::DataCache;
use crate::error::ClientError;
use crate::resources::{Artworks, Messages, Projects, Resource, SiteSettings};
use crate::transport::{Method, Transport};

/// Portfolio API client.
///
/// Reads go through the cache. Every successful mutation revalidates the
/// collection it touched, so subsequent reads show what the server stored.
pub struct PortfolioClient<T: Transport> {
    transport: Arc<T>,
    cache: DataCache<T>,
}

impl<T: Transport> PortfolioClient<T> {
    pub fn new(transport: T) -> Self {
        let transport = Arc::new(transport);
        Self {
            cache: DataCache::new(Arc::clone(&transport)),
            transport,
        }
    }

    pub fn cache(&self) -> &DataCache<T> {
        &self.cache
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub async fn projects(&self) -> Result<Vec<Project>, ClientError> {
        self.cache.get::<Projects>().await
    }

    pub async fn artworks(&self) -> Result<Vec<Artwork>, ClientError> {
        self.cache.get::<Artworks>().await
    }

    /// The inbox, newest first. Requires an admin token when auth is enabled.
    pub async fn messages(&self) -> Result<Vec<Message>, ClientError> {
        self.cache.get::<Messages>().await
    }

    pub async fn settings(&self) -> Result<Settings, ClientError> {
        self.cache.get::<SiteSettings>().await
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    pub async fn create_project(&self, input: &CreateProject) -> Result<Project, ClientError> {
        self.mutate::<Projects, _>(
            Method::POST,
            Projects::PATH.to_string(),
            Some(encode(input)?),
        )
        .await
    }

    pub async fn update_project(
        &self,
        id: DbId,
        patch: &UpdateProject,
    ) -> Result<Project, ClientError> {
        self.mutate::<Projects, _>(
            Method::PUT,
            Projects::PATH.to_string(),
            Some(with_id(id, patch)?),
        )
        .await
    }

    pub async fn delete_project(&self, id: DbId) -> Result<(), ClientError> {
        self.remove::<Projects>(id).await
    }

    // -----------------------------------------------------------------------
    // Artworks
    // -----------------------------------------------------------------------

    pub async fn create_artwork(&self, input: &CreateArtwork) -> Result<Artwork, ClientError> {
        self.mutate::<Artworks, _>(
            Method::POST,
            Artworks::PATH.to_string(),
            Some(encode(input)?),
        )
        .await
    }

    pub async fn update_artwork(
        &self,
        id: DbId,
        patch: &UpdateArtwork,
    ) -> Result<Artwork, ClientError> {
        self.mutate::<Artworks, _>(
            Method::PUT,
            Artworks::PATH.to_string(),
            Some(with_id(id, patch)?),
        )
        .await
    }

    pub async fn delete_artwork(&self, id: DbId) -> Result<(), ClientError> {
        self.remove::<Artworks>(id).await
    }

    // -----------------------------------------------------------------------
    // Messages
    // -----------------------------------------------------------------------

    /// Submit the public contact form.
    pub async fn send_message(&self, input: &CreateMessage) -> Result<Message, ClientError> {
        self.mutate::<Messages, _>(
            Method::POST,
            Messages::PATH.to_string(),
            Some(encode(input)?),
        )
        .await
    }

    pub async fn mark_message_read(&self, id: DbId) -> Result<Message, ClientError> {
        self.set_message_read(id, true).await
    }

    pub async fn set_message_read(&self, id: DbId, is_read: bool) -> Result<Message, ClientError> {
        let patch = UpdateMessage {
            is_read: Some(is_read),
        };
        self.mutate::<Messages, _>(
            Method::PUT,
            Messages::PATH.to_string(),
            Some(with_id(id, &patch)?),
        )
        .await
    }

    pub async fn delete_message(&self, id: DbId) -> Result<(), ClientError> {
        self.remove::<Messages>(id).await
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    pub async fn update_settings(&self, patch: &SettingsPatch) -> Result<Settings, ClientError> {
        self.mutate::<SiteSettings, _>(
            Method::PUT,
            SiteSettings::PATH.to_string(),
            Some(encode(patch)?),
        )
        .await
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn remove<R: Resource>(&self, id: DbId) -> Result<(), ClientError> {
        let path = format!("{}?id={id}", R::PATH);
        self.mutate::<R, Value>(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Send a mutation, then revalidate `R`. A failed revalidation leaves the
    /// entry invalidated and does not fail the mutation.
    async fn mutate<R: Resource, O: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
    ) -> Result<O, ClientError> {
        let value = self.transport.request(method, &path, body).await?;

        if let Err(e) = self.cache.revalidate::<R>().await {
            tracing::warn!(resource = R::PATH, error = %e, "Revalidation after mutation failed");
        }

        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ClientError> {
    serde_json::to_value(body).map_err(|e| ClientError::Encode(e.to_string()))
}

/// Serialize a patch and add the target `id` alongside its fields.
fn with_id<P: Serialize>(id: DbId, patch: &P) -> Result<Value, ClientError> {
    let mut body = encode(patch)?;
    let map = body
        .as_object_mut()
        .ok_or_else(|| ClientError::Encode("patch must serialize to a JSON object".into()))?;
    map.insert("id".to_string(), Value::from(id));
    Ok(body)
}

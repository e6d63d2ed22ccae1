//! Cacheable API resources.

use folio_core::models::{Artwork, Message, Project, Settings};
use serde::de::DeserializeOwned;

/// A readable collection endpoint. The path doubles as the cache key.
pub trait Resource: 'static {
    const PATH: &'static str;
    type Data: DeserializeOwned + Send + 'static;
}

pub struct Projects;
pub struct Artworks;
pub struct Messages;
pub struct SiteSettings;

impl Resource for Projects {
    const PATH: &'static str = "/api/projects";
    type Data = Vec<Project>;
}

impl Resource for Artworks {
    const PATH: &'static str = "/api/artworks";
    type Data = Vec<Artwork>;
}

impl Resource for Messages {
    const PATH: &'static str = "/api/messages";
    type Data = Vec<Message>;
}

impl Resource for SiteSettings {
    const PATH: &'static str = "/api/settings";
    type Data = Settings;
}

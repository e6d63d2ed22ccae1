//! Raw table rows and their conversion into domain records.
//!
//! Category and status are stored as their display labels in TEXT columns.
//! A label that no longer parses is reported as [`StoreError::Corrupt`].

use std::str::FromStr;

use folio_core::catalog::{Category, PublishStatus};
use folio_core::models::{Artwork, Message, Project, Settings};
use folio_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::error::StoreError;

#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub tech_stack: String,
    pub live_url: String,
    pub repo_url: String,
    pub status: String,
    pub image: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct ArtworkRow {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub status: String,
    pub image: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct MessageRow {
    pub id: DbId,
    pub date: Timestamp,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_read: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct SettingsRow {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub instagram: String,
}

fn parse_label<T: FromStr>(
    table: &str,
    id: DbId,
    column: &str,
    raw: &str,
) -> Result<T, StoreError> {
    raw.parse().map_err(|_| {
        StoreError::Corrupt(format!(
            "{table}.{column} of row {id} holds unknown value '{raw}'"
        ))
    })
}

impl TryFrom<ProjectRow> for Project {
    type Error = StoreError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Self {
            category: parse_label::<Category>("projects", row.id, "category", &row.category)?,
            status: parse_label::<PublishStatus>("projects", row.id, "status", &row.status)?,
            id: row.id,
            title: row.title,
            description: row.description,
            tech_stack: row.tech_stack,
            live_url: row.live_url,
            repo_url: row.repo_url,
            image: row.image,
        })
    }
}

impl TryFrom<ArtworkRow> for Artwork {
    type Error = StoreError;

    fn try_from(row: ArtworkRow) -> Result<Self, Self::Error> {
        Ok(Self {
            category: parse_label::<Category>("artworks", row.id, "category", &row.category)?,
            status: parse_label::<PublishStatus>("artworks", row.id, "status", &row.status)?,
            id: row.id,
            title: row.title,
            image: row.image,
        })
    }
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            date: row.date,
            name: row.name,
            email: row.email,
            message: row.message,
            is_read: row.is_read,
        }
    }
}

impl From<SettingsRow> for Settings {
    fn from(row: SettingsRow) -> Self {
        Self {
            name: row.name,
            role: row.role,
            bio: row.bio,
            email: row.email,
            github: row.github,
            linkedin: row.linkedin,
            instagram: row.instagram,
        }
    }
}

//! Project record model and DTOs.

use serde::{Deserialize, Serialize};

use super::Collection;
use crate::catalog::{
    tech_tags, Category, PublishStatus, DEFAULT_PROJECT_TITLE, PLACEHOLDER_IMAGE_URL,
};
use crate::error::CoreError;
use crate::fields::{blank_as_none, or_default_str};
use crate::ids::{flexible_id, IdStrategy};
use crate::types::{DbId, Timestamp};

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "flexible_id")]
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub description: String,
    /// Comma-delimited tags, stored as entered.
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default)]
    pub status: PublishStatus,
    pub image: String,
}

impl Project {
    pub fn tech_tags(&self) -> Vec<&str> {
        tech_tags(&self.tech_stack)
    }

    pub fn from_new(id: DbId, new: NewProject) -> Self {
        Self {
            id,
            title: new.title,
            category: new.category,
            description: new.description,
            tech_stack: new.tech_stack,
            live_url: new.live_url,
            repo_url: new.repo_url,
            status: new.status,
            image: new.image,
        }
    }
}

/// DTO for creating a project. Blank fields fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

/// Project insert values with all defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub tech_stack: String,
    pub live_url: String,
    pub repo_url: String,
    pub status: PublishStatus,
    pub image: String,
}

impl From<CreateProject> for NewProject {
    fn from(input: CreateProject) -> Self {
        Self {
            title: or_default_str(input.title, DEFAULT_PROJECT_TITLE),
            category: input.category.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            tech_stack: input.tech_stack.unwrap_or_default(),
            live_url: input.live_url.unwrap_or_default(),
            repo_url: input.repo_url.unwrap_or_default(),
            status: input.status.unwrap_or_default(),
            image: or_default_str(input.image, PLACEHOLDER_IMAGE_URL),
        }
    }
}

/// DTO for updating a project. All fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Collection for Project {
    const KEY: &'static str = "projects";
    const ENTITY: &'static str = "Project";
    const ID_STRATEGY: IdStrategy = IdStrategy::Timestamp;

    type Create = CreateProject;
    type New = NewProject;
    type Update = UpdateProject;

    fn resolve(input: CreateProject) -> Result<NewProject, CoreError> {
        Ok(input.into())
    }

    fn assemble(id: DbId, _created_at: Timestamp, new: NewProject) -> Self {
        Self::from_new(id, new)
    }

    fn id(&self) -> DbId {
        self.id
    }

    fn apply(&mut self, patch: &UpdateProject) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(tech_stack) = &patch.tech_stack {
            self.tech_stack = tech_stack.clone();
        }
        if let Some(live_url) = &patch.live_url {
            self.live_url = live_url.clone();
        }
        if let Some(repo_url) = &patch.repo_url {
            self.repo_url = repo_url.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
    }
}

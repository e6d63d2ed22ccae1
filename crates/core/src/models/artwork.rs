//! Artwork record model and DTOs.

use serde::{Deserialize, Serialize};

use super::Collection;
use crate::catalog::{Category, PublishStatus, DEFAULT_ARTWORK_TITLE, PLACEHOLDER_IMAGE_URL};
use crate::error::CoreError;
use crate::fields::{blank_as_none, or_default_str};
use crate::ids::{flexible_id, IdStrategy};
use crate::types::{DbId, Timestamp};

/// A gallery artwork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    #[serde(deserialize_with = "flexible_id")]
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub status: PublishStatus,
    pub image: String,
}

/// DTO for creating an artwork.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtwork {
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewArtwork {
    pub title: String,
    pub category: Category,
    pub status: PublishStatus,
    pub image: String,
}

impl From<CreateArtwork> for NewArtwork {
    fn from(input: CreateArtwork) -> Self {
        Self {
            title: or_default_str(input.title, DEFAULT_ARTWORK_TITLE),
            category: input.category.unwrap_or_default(),
            status: input.status.unwrap_or_default(),
            image: or_default_str(input.image, PLACEHOLDER_IMAGE_URL),
        }
    }
}

/// DTO for updating an artwork. All fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtwork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Collection for Artwork {
    const KEY: &'static str = "artworks";
    const ENTITY: &'static str = "Artwork";
    const ID_STRATEGY: IdStrategy = IdStrategy::Sequential;

    type Create = CreateArtwork;
    type New = NewArtwork;
    type Update = UpdateArtwork;

    fn resolve(input: CreateArtwork) -> Result<NewArtwork, CoreError> {
        Ok(input.into())
    }

    fn assemble(id: DbId, _created_at: Timestamp, new: NewArtwork) -> Self {
        Self {
            id,
            title: new.title,
            category: new.category,
            status: new.status,
            image: new.image,
        }
    }

    fn id(&self) -> DbId {
        self.id
    }

    fn apply(&mut self, patch: &UpdateArtwork) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn defaults_match_project_conventions() {
        let new = NewArtwork::from(CreateArtwork::default());
        assert_eq!(new.title, DEFAULT_ARTWORK_TITLE);
        assert_eq!(new.status, PublishStatus::Draft);
        assert_eq!(new.image, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn apply_changes_only_patched_fields() {
        let mut artwork = Artwork::assemble(
            1,
            Utc::now(),
            NewArtwork::from(CreateArtwork {
                title: Some("Dusk".into()),
                category: Some(Category::Illustration),
                ..Default::default()
            }),
        );
        artwork.apply(&UpdateArtwork {
            image: Some("https://cdn.example.com/dusk.png".into()),
            ..Default::default()
        });
        assert_eq!(artwork.title, "Dusk");
        assert_eq!(artwork.category, Category::Illustration);
        assert_eq!(artwork.image, "https://cdn.example.com/dusk.png");
    }
}

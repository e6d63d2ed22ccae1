//! Portfolio catalog vocabulary: categories, publish status and content defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Image shown for projects and artworks created without one.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?auto=format&fit=crop&q=80&w=100";

/// Title given to a project created without one.
pub const DEFAULT_PROJECT_TITLE: &str = "Untitled Project";

/// Title given to an artwork created without one.
pub const DEFAULT_ARTWORK_TITLE: &str = "Untitled Artwork";

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Gallery category of a project or artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "E-Commerce")]
    ECommerce,
    Illustration,
    #[serde(rename = "Game Dev")]
    GameDev,
    #[default]
    Uncategorized,
}

impl Category {
    /// Categories an editor can pick, in display order.
    pub const SELECTABLE: [Category; 4] = [
        Category::WebDev,
        Category::ECommerce,
        Category::Illustration,
        Category::GameDev,
    ];

    /// Wire and storage label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WebDev => "Web Dev",
            Self::ECommerce => "E-Commerce",
            Self::Illustration => "Illustration",
            Self::GameDev => "Game Dev",
            Self::Uncategorized => "Uncategorized",
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Web Dev" => Ok(Self::WebDev),
            "E-Commerce" => Ok(Self::ECommerce),
            "Illustration" => Ok(Self::Illustration),
            "Game Dev" => Ok(Self::GameDev),
            "Uncategorized" => Ok(Self::Uncategorized),
            other => Err(CoreError::Validation(format!(
                "Unknown category '{other}'. Must be one of: Web Dev, E-Commerce, Illustration, Game Dev"
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Publish status
// ---------------------------------------------------------------------------

/// Whether a project or artwork is shown on the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PublishStatus {
    Live,
    #[default]
    Draft,
}

impl PublishStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Draft => "Draft",
        }
    }

    pub fn is_live(self) -> bool {
        self == Self::Live
    }
}

impl FromStr for PublishStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Live" => Ok(Self::Live),
            "Draft" => Ok(Self::Draft),
            other => Err(CoreError::Validation(format!(
                "Unknown status '{other}'. Must be one of: Live, Draft"
            ))),
        }
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tech stack
// ---------------------------------------------------------------------------

/// Split a comma-delimited tech stack into trimmed, non-empty tags.
pub fn tech_tags(tech_stack: &str) -> Vec<&str> {
    tech_stack
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip_through_from_str() {
        for category in Category::SELECTABLE {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!(
            "Uncategorized".parse::<Category>().unwrap(),
            Category::Uncategorized
        );
    }

    #[test]
    fn category_rejects_unknown_label() {
        assert!("Sculpture".parse::<Category>().is_err());
        assert!("web dev".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_with_display_label() {
        let json = serde_json::to_string(&Category::ECommerce).unwrap();
        assert_eq!(json, "\"E-Commerce\"");
    }

    #[test]
    fn status_defaults_to_draft() {
        assert_eq!(PublishStatus::default(), PublishStatus::Draft);
        assert!(!PublishStatus::Draft.is_live());
        assert!(PublishStatus::Live.is_live());
    }

    #[test]
    fn tech_tags_trims_and_drops_empty_entries() {
        assert_eq!(
            tech_tags(" React, Tailwind ,,Node.js, "),
            vec!["React", "Tailwind", "Node.js"]
        );
        assert!(tech_tags("").is_empty());
    }
}

//! Display data derived from cached records.
//!
//! Everything here borrows the cached collections and never mutates them.

use std::fmt;
use std::str::FromStr;

use folio_core::catalog::Category;
use folio_core::error::CoreError;
use folio_core::models::{Artwork, Message, Project};

/// Label of the gallery tab that shows every category.
pub const ALL_LABEL: &str = "All";

/// Gallery category tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(category) => category.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_LABEL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tabs shown above the gallery: "All" then each selectable category.
pub fn gallery_tabs() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(Category::SELECTABLE.into_iter().map(CategoryFilter::Only))
        .collect()
}

/// Live projects in the selected category, in stored order.
pub fn gallery(projects: &[Project], filter: CategoryFilter) -> Vec<&Project> {
    projects
        .iter()
        .filter(|p| p.status.is_live() && filter.matches(p.category))
        .collect()
}

pub fn live_artworks(artworks: &[Artwork]) -> Vec<&Artwork> {
    artworks.iter().filter(|a| a.status.is_live()).collect()
}

pub fn unread_count(messages: &[Message]) -> usize {
    messages.iter().filter(|m| !m.is_read).count()
}

/// Messages ordered newest first regardless of the order they arrived in.
pub fn newest_first(messages: &[Message]) -> Vec<&Message> {
    let mut sorted: Vec<&Message> = messages.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    sorted
}

/// Counts shown on the admin overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardSummary {
    pub total_projects: usize,
    pub live_projects: usize,
    pub total_artworks: usize,
    pub unread_messages: usize,
}

impl DashboardSummary {
    pub fn draft_projects(&self) -> usize {
        self.total_projects - self.live_projects
    }
}

pub fn dashboard_summary(
    projects: &[Project],
    artworks: &[Artwork],
    messages: &[Message],
) -> DashboardSummary {
    DashboardSummary {
        total_projects: projects.len(),
        live_projects: projects.iter().filter(|p| p.status.is_live()).count(),
        total_artworks: artworks.len(),
        unread_messages: unread_count(messages),
    }
}

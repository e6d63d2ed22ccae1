//! Site settings singleton: the profile shown across the public pages.

use serde::{Deserialize, Serialize};

/// The single settings record. There is no id; exactly one instance exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub instagram: String,
}

/// Placeholder profile seeded on first access.
impl Default for Settings {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            role: "UI/UX Designer & Developer".to_string(),
            bio: "I craft digital experiences that merge clean aesthetics with robust functionality."
                .to_string(),
            email: "hello@example.com".to_string(),
            github: "https://github.com/".to_string(),
            linkedin: "https://linkedin.com/".to_string(),
            instagram: "https://instagram.com/".to_string(),
        }
    }
}

/// Partial settings update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl Settings {
    /// Merge a patch over the current values.
    pub fn apply(&mut self, patch: &SettingsPatch) {
        let fields = [
            (&mut self.name, &patch.name),
            (&mut self.role, &patch.role),
            (&mut self.bio, &patch.bio),
            (&mut self.email, &patch.email),
            (&mut self.github, &patch.github),
            (&mut self.linkedin, &patch.linkedin),
            (&mut self.instagram, &patch.instagram),
        ];
        for (current, update) in fields {
            if let Some(value) = update {
                *current = value.clone();
            }
        }
    }
}

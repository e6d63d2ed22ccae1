//! Serde helpers for request fields coming from HTML forms.
//!
//! Admin forms submit untouched inputs as empty strings, so an empty or
//! whitespace-only value is treated the same as an absent one.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string field, mapping blank input to `None` and
/// parsing anything else with [`FromStr`].
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(s) if !s.trim().is_empty() => s.parse().map(Some).map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Resolve an optional form value against a fallback.
pub fn or_default_str(value: Option<String>, fallback: &str) -> String {
    value.unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::catalog::Category;

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "blank_as_none")]
        category: Option<Category>,
        #[serde(default, deserialize_with = "blank_as_none")]
        title: Option<String>,
    }

    #[test]
    fn blank_and_missing_values_become_none() {
        let form: Form = serde_json::from_str(r#"{"category": "  ", "title": ""}"#).unwrap();
        assert!(form.category.is_none());
        assert!(form.title.is_none());

        let form: Form = serde_json::from_str("{}").unwrap();
        assert!(form.category.is_none());

        let form: Form = serde_json::from_str(r#"{"category": null}"#).unwrap();
        assert!(form.category.is_none());
    }

    #[test]
    fn present_values_are_parsed() {
        let form: Form =
            serde_json::from_str(r#"{"category": "Game Dev", "title": "Acme"}"#).unwrap();
        assert_eq!(form.category, Some(Category::GameDev));
        assert_eq!(form.title.as_deref(), Some("Acme"));
    }

    #[test]
    fn unknown_enum_value_is_a_deserialization_error() {
        let result = serde_json::from_str::<Form>(r#"{"category": "Pottery"}"#);
        assert!(result.is_err());
    }
}

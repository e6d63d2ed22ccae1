//! Record id assignment and lenient id parsing.

use serde::{Deserialize, Deserializer};

use crate::types::{DbId, Timestamp};

/// How a file-backed collection assigns ids to new records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// `max(existing) + 1`, starting at 1.
    Sequential,
    /// Creation time in Unix milliseconds, bumped past `max(existing)` on collision.
    Timestamp,
}

/// Compute the id for a new record given the ids already in the collection.
///
/// The result is always greater than every existing id, so it is unique.
/// Returns `None` when the largest existing id is `DbId::MAX`.
pub fn next_id<I>(strategy: IdStrategy, existing: I, now: Timestamp) -> Option<DbId>
where
    I: IntoIterator<Item = DbId>,
{
    let max = existing.into_iter().max();
    match strategy {
        IdStrategy::Sequential => max.map_or(Some(1), |m| m.checked_add(1)),
        IdStrategy::Timestamp => {
            let millis = now.timestamp_millis();
            match max {
                Some(m) if m >= millis => m.checked_add(1),
                _ => Some(millis),
            }
        }
    }
}

/// Parse an id supplied as text (query parameter or form value).
pub fn parse_id(raw: &str) -> Option<DbId> {
    raw.trim().parse().ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(DbId),
    Text(String),
}

/// Deserialize an optional id given either as a JSON number or as a numeric string.
///
/// Admin forms echo ids back as strings, so both shapes are accepted.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Int(id)) => Ok(Some(id)),
        Some(RawId::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawId::Text(s)) => parse_id(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("id '{s}' is not an integer"))),
    }
}

/// Required-id counterpart of [`lenient_id`], used when reading stored records.
pub fn flexible_id<'de, D>(deserializer: D) -> Result<DbId, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_id(deserializer)?.ok_or_else(|| serde::de::Error::custom("record id is missing"))
}

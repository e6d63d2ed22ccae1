//! Contact message record model and DTOs.
//!
//! Messages are created by the public contact form. The server stamps the
//! creation date and unread flag; after creation only `isRead` may change.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Collection;
use crate::error::CoreError;
use crate::ids::{flexible_id, IdStrategy};
use crate::types::{DbId, Timestamp};

/// A message left through the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(deserialize_with = "flexible_id")]
    pub id: DbId,
    pub date: Timestamp,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
}

/// Contact form body. Client-supplied `date` and `isRead` are not part of
/// the DTO and are therefore dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trimmed, validated message content.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewMessage {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 5000, message = "message must be between 1 and 5000 characters"))]
    pub message: String,
}

/// DTO for updating a message: only the read flag is mutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
}

impl UpdateMessage {
    /// Read flag to store. An update without `isRead` marks the message read.
    pub fn read_state(&self) -> bool {
        self.is_read.unwrap_or(true)
    }
}

impl Collection for Message {
    const KEY: &'static str = "messages";
    const ENTITY: &'static str = "Message";
    const ID_STRATEGY: IdStrategy = IdStrategy::Sequential;

    type Create = CreateMessage;
    type New = NewMessage;
    type Update = UpdateMessage;

    fn resolve(input: CreateMessage) -> Result<NewMessage, CoreError> {
        let new = NewMessage {
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            message: input.message.trim().to_string(),
        };
        new.validate()?;
        Ok(new)
    }

    fn assemble(id: DbId, created_at: Timestamp, new: NewMessage) -> Self {
        Self {
            id,
            date: created_at,
            name: new.name,
            email: new.email,
            message: new.message,
            is_read: false,
        }
    }

    fn id(&self) -> DbId {
        self.id
    }

    fn apply(&mut self, patch: &UpdateMessage) {
        self.is_read = patch.read_state();
    }

    /// Newest first; equal dates fall back to the higher id.
    fn order(records: &mut [Self]) {
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    }
}

//! Shared response bodies for API handlers.

use serde::Serialize;

/// `{ "success": true, "message": "..." }` acknowledgement returned by deletes.
#[derive(Debug, Serialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

impl Acknowledgement {
    pub fn deleted(entity: &str) -> Self {
        Self {
            success: true,
            message: format!("{entity} deleted successfully"),
        }
    }
}

//! Request handlers.
//!
//! Collection endpoints share one generic handler set in [`resource`],
//! instantiated per record type by the route table.

pub mod auth;
pub mod resource;
pub mod settings;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Decode a JSON request body, mapping any decode failure to 400.
///
/// Handlers take the raw body so that malformed JSON and schema mismatches
/// produce the same `BAD_REQUEST` error shape as every other failure.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
}

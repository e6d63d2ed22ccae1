//! Domain model for the portfolio content service.
//!
//! Record types, request DTOs, collection defaults and id assignment shared
//! by the storage backends, the HTTP API and the client cache.

pub mod catalog;
pub mod error;
pub mod fields;
pub mod ids;
pub mod models;
pub mod types;

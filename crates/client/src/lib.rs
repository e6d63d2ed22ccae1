//! Client for the Folio API with a shared, de-duplicating read cache.
//!
//! [`PortfolioClient`] reads collections through a [`DataCache`] and
//! revalidates the affected collection after every successful mutation.
//! The [`views`] module derives display data from cached records.

pub mod cache;
pub mod client;
pub mod error;
pub mod resources;
pub mod transport;
pub mod views;

pub use cache::DataCache;
pub use client::PortfolioClient;
pub use error::ClientError;
pub use transport::{HttpTransport, Transport};

//! Keyed read cache with in-flight request sharing.
//!
//! Each resource path maps to a slot that is either a completed response or
//! a shared in-flight fetch. Concurrent readers of an empty slot all await
//! the same fetch, so the network sees one request. Every fetch is stamped
//! with a generation; a fetch that finishes after its slot was invalidated
//! returns its result to its own callers but does not populate the slot.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::ClientError;
use crate::resources::Resource;
use crate::transport::{Method, Transport};

type SharedFetch = Shared<BoxFuture<'static, Result<Value, ClientError>>>;

enum Slot {
    Ready(Value),
    Loading { generation: u64, fetch: SharedFetch },
}

/// Read cache over a [`Transport`].
pub struct DataCache<T: Transport> {
    transport: Arc<T>,
    slots: Mutex<HashMap<&'static str, Slot>>,
    generation: AtomicU64,
}

impl<T: Transport> DataCache<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            slots: Mutex::new(HashMap::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// The resource's data, fetched at most once until invalidated.
    pub async fn get<R: Resource>(&self) -> Result<R::Data, ClientError> {
        let value = self.load(R::PATH).await?;
        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Drop the cached entry so the next read fetches again.
    pub async fn invalidate<R: Resource>(&self) {
        self.slots.lock().await.remove(R::PATH);
    }

    /// Drop the cached entry and fetch it again.
    pub async fn revalidate<R: Resource>(&self) -> Result<R::Data, ClientError> {
        self.invalidate::<R>().await;
        self.get::<R>().await
    }

    /// Whether a completed response is cached for the resource.
    pub async fn is_cached<R: Resource>(&self) -> bool {
        matches!(self.slots.lock().await.get(R::PATH), Some(Slot::Ready(_)))
    }

    async fn load(&self, key: &'static str) -> Result<Value, ClientError> {
        let (generation, fetch) = {
            let mut slots = self.slots.lock().await;
            match slots.get(key) {
                Some(Slot::Ready(value)) => return Ok(value.clone()),
                Some(Slot::Loading { generation, fetch }) => (*generation, fetch.clone()),
                None => {
                    let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
                    let fetch = self.transport.request(Method::GET, key, None).shared();
                    slots.insert(
                        key,
                        Slot::Loading {
                            generation,
                            fetch: fetch.clone(),
                        },
                    );
                    tracing::debug!(key, generation, "Fetching resource");
                    (generation, fetch)
                }
            }
        };

        let result = fetch.await;

        let mut slots = self.slots.lock().await;
        let current = matches!(
            slots.get(key),
            Some(Slot::Loading { generation: g, .. }) if *g == generation
        );
        if current {
            match &result {
                Ok(value) => {
                    slots.insert(key, Slot::Ready(value.clone()));
                }
                Err(_) => {
                    slots.remove(key);
                }
            }
        }
        result
    }
}

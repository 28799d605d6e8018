//! Persistence boundary for purge targets.
//!
//! The engine does not own a database. Applications register one
//! [`ModelStore`] per logical model in a [`StoreRegistry`]; at run time the
//! engine resolves configured model descriptors against the registry and
//! drives the [`SoftDeletePurge`] capability of each.
//!
//! Whether a model supports soft deletion is a static property of its store
//! type: a store either exposes the capability through
//! [`ModelStore::soft_deletes`] or it does not, and the engine refuses to
//! run against one that does not.

mod error;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use error::{StoreError, StoreResult};

/// A registered, queryable collection for one logical model.
pub trait ModelStore: Send + Sync {
    /// Logical name of the model, as referenced by configuration.
    fn name(&self) -> &str;

    /// The soft-delete capability, if this model supports it.
    ///
    /// Returning `None` marks the model as not soft-deletable; the engine
    /// treats a configured model without the capability as fatal
    /// misconfiguration rather than skipping it.
    fn soft_deletes(&self) -> Option<&dyn SoftDeletePurge>;
}

/// Permanent removal of expired soft-deleted records.
#[async_trait]
pub trait SoftDeletePurge: Send + Sync {
    /// Permanently delete every record whose soft-delete marker is strictly
    /// earlier than `cutoff`, as a single bulk operation, and return the
    /// number of records removed.
    ///
    /// Records that are not soft-deleted must not be touched. Atomicity of
    /// the bulk delete is the store's responsibility.
    async fn purge_deleted_before(&self, cutoff: DateTime<Utc>) -> StoreResult<u64>;
}

/// A registered model without the soft-delete capability.
///
/// Registering such a model keeps it addressable by configuration, so a
/// purge list that names it fails loudly instead of the entry being
/// silently skipped.
pub struct PlainModelStore {
    name: String,
}

impl PlainModelStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ModelStore for PlainModelStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn soft_deletes(&self) -> Option<&dyn SoftDeletePurge> {
        None
    }
}

/// Name-addressed collection of the application's model stores.
#[derive(Default)]
pub struct StoreRegistry {
    models: HashMap<String, Arc<dyn ModelStore>>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a store under its model name.
    ///
    /// Re-registering a name replaces the previous store.
    pub fn register(&mut self, store: Arc<dyn ModelStore>) {
        self.models.insert(store.name().to_string(), store);
    }

    /// Resolve a configured model descriptor to its store.
    pub fn resolve(&self, name: &str) -> Option<&dyn ModelStore> {
        self.models.get(name).map(|store| store.as_ref())
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True when no models are registered.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

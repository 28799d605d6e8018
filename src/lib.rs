//! Purging of expired soft-deleted records.
//!
//! Applications that soft-delete rows (a nullable `deleted_at` timestamp)
//! keep them recoverable, but storage growth and data-retention policy
//! demand that trashed records are eventually removed for good. This crate
//! provides the maintenance routine that does so. A [`PurgeEngine`] reads
//! its settings from an injected configuration source and verifies that
//! every configured model actually supports soft deletion before it
//! permanently deletes the records whose soft-delete marker is older than
//! the retention window.
//!
//! The engine is a library component with no scheduler of its own.
//! Construct it with a [`ConfigSource`], a [`StoreRegistry`] describing the
//! application's models, and a [`LogSink`], then have your scheduling
//! infrastructure call [`PurgeEngine::run`] on whatever cadence your
//! retention policy requires. At most one run should be active at a time;
//! the engine does no cross-run coordination.
//!
//! # Configuration
//!
//! ```toml
//! models = ["documents", "attachments"]  # or a single string
//! days = 30
//! log = true
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use purgatory::{
//!     PurgeEngine, StoreRegistry, TomlTableSource, TracingLogSink,
//!     store::sqlite::SqliteSoftDeleteStore,
//! };
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = sqlx::SqlitePool::connect("sqlite:app.db").await?;
//!
//! let mut registry = StoreRegistry::new();
//! registry.register(Arc::new(SqliteSoftDeleteStore::new(pool, "documents")));
//!
//! let config = TomlTableSource::from_str(
//!     r#"
//!     models = "documents"
//!     days = 30
//!     log = true
//!     "#,
//! )?;
//!
//! let engine = PurgeEngine::new(
//!     Arc::new(config),
//!     Arc::new(registry),
//!     Arc::new(TracingLogSink),
//! );
//! engine.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod log;
pub mod purge;
pub mod store;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, ConfigSource, PurgeConfig, TomlTableSource};
pub use log::{LogSink, MemoryLogSink, TracingLogSink};
pub use purge::{PurgeEngine, PurgeError};
pub use store::{
    ModelStore, PlainModelStore, SoftDeletePurge, StoreError, StoreRegistry, StoreResult,
};

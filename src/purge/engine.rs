use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::{
    config::{ConfigError, ConfigSource, PurgeConfig},
    log::LogSink,
    store::{SoftDeletePurge, StoreError, StoreRegistry},
};

/// Errors surfaced by [`PurgeEngine::run`].
#[derive(Debug, thiserror::Error)]
pub enum PurgeError {
    /// Fatal misconfiguration; fix the deployment before rescheduling.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Persistence-layer failure, propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Permanently removes expired soft-deleted records.
///
/// The engine holds no state between runs. Every invocation of [`run`]
/// re-reads configuration from the injected source and validates each
/// configured model against the registry before purging records whose
/// soft-delete marker is older than the retention window.
///
/// Runs are sequential and run-to-completion. The engine performs no
/// cross-run coordination; the scheduler that invokes it must ensure at
/// most one run is active at a time. Correctness of deletion counts under
/// concurrent store access relies on the store's own transaction
/// guarantees.
///
/// [`run`]: PurgeEngine::run
pub struct PurgeEngine {
    config: Arc<dyn ConfigSource>,
    registry: Arc<StoreRegistry>,
    log: Arc<dyn LogSink>,
}

impl PurgeEngine {
    /// Create an engine over the given configuration source, model
    /// registry, and log sink.
    pub fn new(
        config: Arc<dyn ConfigSource>,
        registry: Arc<StoreRegistry>,
        log: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            config,
            registry,
            log,
        }
    }

    /// Execute one purge run.
    ///
    /// Deletion is permanent: purged records are unrecoverable even through
    /// include-deleted lookups. Success is an `Ok(())` return; the run
    /// produces no result beyond its side effects and optional log output.
    ///
    /// Every configured model is resolved and capability-checked before any
    /// deletion happens, so a [`ConfigError`] always leaves the store
    /// untouched. A [`StoreError`] mid-run aborts immediately and is not
    /// retried; models purged earlier in the same run stay purged.
    pub async fn run(&self) -> Result<(), PurgeError> {
        let config = PurgeConfig::from_source(self.config.as_ref())?;

        let targets = self.validate_targets(&config)?;

        for (name, purge) in targets {
            let cutoff = Utc::now() - Duration::days(i64::from(config.days));
            let deleted = purge.purge_deleted_before(cutoff).await?;

            if config.log && deleted > 0 {
                self.log.info(&format!(
                    "Permanently removed {deleted} soft-deleted records from {name}"
                ));
            }
        }

        Ok(())
    }

    /// Resolve every configured model and check its soft-delete capability.
    ///
    /// Runs before any deletion so that misconfiguration aborts the whole
    /// run with no partial effects, regardless of where in the list the
    /// offending model sits.
    fn validate_targets<'a>(
        &'a self,
        config: &'a PurgeConfig,
    ) -> Result<Vec<(&'a str, &'a dyn SoftDeletePurge)>, ConfigError> {
        config
            .models
            .iter()
            .map(|name| {
                let store = self
                    .registry
                    .resolve(name)
                    .ok_or_else(|| ConfigError::UnknownModel(name.clone()))?;
                let purge = store
                    .soft_deletes()
                    .ok_or_else(|| ConfigError::NotSoftDeletable(name.clone()))?;
                Ok((name.as_str(), purge))
            })
            .collect()
    }
}

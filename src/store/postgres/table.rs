use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::store::{ModelStore, SoftDeletePurge, StoreResult};

/// Store for a PostgreSQL table that soft-deletes via a nullable timestamp
/// column (`deleted_at` unless overridden).
///
/// Behaves identically to the SQLite variant: `NULL` marker means live,
/// purging is a single bulk `DELETE` over expired markers.
pub struct PostgresSoftDeleteStore {
    pool: PgPool,
    table: String,
    marker_column: String,
}

impl PostgresSoftDeleteStore {
    /// Create a store for `table` with the conventional `deleted_at`
    /// marker column.
    pub fn new(pool: PgPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
            marker_column: "deleted_at".into(),
        }
    }

    /// Use a non-default marker column.
    pub fn with_marker_column(mut self, column: impl Into<String>) -> Self {
        self.marker_column = column.into();
        self
    }
}

impl ModelStore for PostgresSoftDeleteStore {
    fn name(&self) -> &str {
        &self.table
    }

    fn soft_deletes(&self) -> Option<&dyn SoftDeletePurge> {
        Some(self)
    }
}

#[async_trait]
impl SoftDeletePurge for PostgresSoftDeleteStore {
    async fn purge_deleted_before(&self, cutoff: DateTime<Utc>) -> StoreResult<u64> {
        // Identifiers come from store registration, not user input; quoting
        // keeps unusual table and column names working.
        let sql = format!(
            r#"DELETE FROM "{table}" WHERE "{column}" IS NOT NULL AND "{column}" < $1"#,
            table = self.table,
            column = self.marker_column,
        );

        let result = sqlx::query(&sql).bind(cutoff).execute(&self.pool).await?;
        let deleted = result.rows_affected();

        if deleted > 0 {
            tracing::debug!(
                table = %self.table,
                deleted,
                cutoff = %cutoff,
                "Purged expired soft-deleted rows"
            );
        }

        Ok(deleted)
    }
}

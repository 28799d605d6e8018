use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::store::{ModelStore, SoftDeletePurge, StoreResult};

/// Store for a SQLite table that soft-deletes via a nullable timestamp
/// column (`deleted_at` unless overridden).
///
/// A `NULL` marker means the record is live; a non-`NULL` marker records
/// when it was soft-deleted. Purging issues a single bulk `DELETE` over the
/// expired markers.
pub struct SqliteSoftDeleteStore {
    pool: SqlitePool,
    table: String,
    marker_column: String,
}

impl SqliteSoftDeleteStore {
    /// Create a store for `table` with the conventional `deleted_at`
    /// marker column.
    pub fn new(pool: SqlitePool, table: impl Into<String>) -> Self {
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

impl ModelStore for SqliteSoftDeleteStore {
    fn name(&self) -> &str {
        &self.table
    }

    fn soft_deletes(&self) -> Option<&dyn SoftDeletePurge> {
        Some(self)
    }
}

#[async_trait]
impl SoftDeletePurge for SqliteSoftDeleteStore {
    async fn purge_deleted_before(&self, cutoff: DateTime<Utc>) -> StoreResult<u64> {
        // Identifiers come from store registration, not user input; quoting
        // keeps unusual table and column names working.
        let sql = format!(
            r#"DELETE FROM "{table}" WHERE "{column}" IS NOT NULL AND "{column}" < ?"#,
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

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    async fn create_test_pool() -> SqlitePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory SQLite pool");

        sqlx::query(
            r#"
            CREATE TABLE documents (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                deleted_at TIMESTAMP
            )
            "#,
        )
        .execute(&pool)
        .await
        .expect("Failed to create schema");

        pool
    }

    async fn insert_document(
        pool: &SqlitePool,
        title: &str,
        deleted_at: Option<DateTime<Utc>>,
    ) -> i64 {
        sqlx::query("INSERT INTO documents (title, deleted_at) VALUES (?, ?)")
            .bind(title)
            .bind(deleted_at)
            .execute(pool)
            .await
            .expect("Failed to insert document")
            .last_insert_rowid()
    }

    async fn document_count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM documents")
            .fetch_one(pool)
            .await
            .expect("Failed to count documents")
    }

    #[tokio::test]
    async fn purges_records_soft_deleted_before_the_cutoff() {
        let pool = create_test_pool().await;
        let cutoff = Utc::now();

        insert_document(&pool, "expired", Some(cutoff - Duration::days(365))).await;
        insert_document(&pool, "recent", Some(cutoff + Duration::seconds(1))).await;

        let store = SqliteSoftDeleteStore::new(pool.clone(), "documents");
        let deleted = store.purge_deleted_before(cutoff).await.unwrap();

        assert_eq!(deleted, 1);
        assert_eq!(document_count(&pool).await, 1);
    }

    #[tokio::test]
    async fn retains_records_soft_deleted_exactly_at_the_cutoff() {
        let pool = create_test_pool().await;
        let cutoff = Utc::now();

        insert_document(&pool, "boundary", Some(cutoff)).await;

        let store = SqliteSoftDeleteStore::new(pool.clone(), "documents");
        let deleted = store.purge_deleted_before(cutoff).await.unwrap();

        assert_eq!(deleted, 0);
        assert_eq!(document_count(&pool).await, 1);
    }

    #[tokio::test]
    async fn never_touches_live_records() {
        let pool = create_test_pool().await;

        insert_document(&pool, "live", None).await;

        let store = SqliteSoftDeleteStore::new(pool.clone(), "documents");
        let deleted = store
            .purge_deleted_before(Utc::now() + Duration::days(3650))
            .await
            .unwrap();

        assert_eq!(deleted, 0);
        assert_eq!(document_count(&pool).await, 1);
    }

    #[tokio::test]
    async fn repeated_purge_deletes_nothing_more() {
        let pool = create_test_pool().await;
        let cutoff = Utc::now();

        insert_document(&pool, "expired", Some(cutoff - Duration::days(30))).await;

        let store = SqliteSoftDeleteStore::new(pool.clone(), "documents");
        assert_eq!(store.purge_deleted_before(cutoff).await.unwrap(), 1);
        assert_eq!(store.purge_deleted_before(cutoff).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn honors_a_custom_marker_column() {
        let pool = create_test_pool().await;

        sqlx::query(
            r#"
            CREATE TABLE uploads (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                trashed_at TIMESTAMP
            )
            "#,
        )
        .execute(&pool)
        .await
        .expect("Failed to create schema");

        let cutoff = Utc::now();
        sqlx::query("INSERT INTO uploads (trashed_at) VALUES (?)")
            .bind(cutoff - Duration::days(2))
            .execute(&pool)
            .await
            .expect("Failed to insert upload");

        let store =
            SqliteSoftDeleteStore::new(pool.clone(), "uploads").with_marker_column("trashed_at");
        let deleted = store.purge_deleted_before(cutoff).await.unwrap();

        assert_eq!(deleted, 1);
    }

    #[tokio::test]
    async fn reports_the_soft_delete_capability() {
        let pool = create_test_pool().await;
        let store = SqliteSoftDeleteStore::new(pool, "documents");

        assert_eq!(store.name(), "documents");
        assert!(store.soft_deletes().is_some());
    }
}

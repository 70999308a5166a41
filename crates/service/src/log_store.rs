//! Per-request storage handles.
//!
//! `LogStore` keeps only connection settings. Every unit of work gets its own
//! connection, handed to the work explicitly and closed once it finishes,
//! whether it succeeded or not. Dropping the handle (panic, cancelled request)
//! closes it as well.

use std::future::Future;

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use tracing::{debug, warn};

use crate::errors::ServiceError;

#[derive(Clone, Debug)]
pub struct LogStore {
    config: DatabaseConfig,
}

impl LogStore {
    pub fn new(config: DatabaseConfig) -> Self { Self { config } }

    async fn open(&self) -> Result<DatabaseConnection, ServiceError> {
        let conn = models::db::connect_with_config(&self.config).await?;
        debug!("storage connection opened");
        Ok(conn)
    }

    /// Run `work` with a freshly opened connection and close it afterwards.
    pub async fn scoped<F, Fut, T>(&self, work: F) -> Result<T, ServiceError>
    where
        F: FnOnce(DatabaseConnection) -> Fut,
        Fut: Future<Output = Result<T, ServiceError>>,
    {
        let conn = self.open().await?;
        let result = work(conn.clone()).await;
        if let Err(e) = conn.close().await {
            warn!(error = %e, "closing storage connection failed");
        } else {
            debug!("storage connection closed");
        }
        result
    }

    /// Ensure the `logs` table exists. Safe to call on every startup.
    pub async fn initialize(&self) -> Result<(), ServiceError> {
        self.scoped(|conn| async move {
            models::db::init_storage(&conn).await?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_store;

    #[tokio::test]
    async fn initialize_twice_is_ok() -> Result<(), anyhow::Error> {
        let store = temp_store();
        store.initialize().await?;
        store.initialize().await?;
        Ok(())
    }

    #[tokio::test]
    async fn scoped_returns_work_error_and_still_releases() -> Result<(), anyhow::Error> {
        let store = temp_store();
        store.initialize().await?;

        let res: Result<(), ServiceError> = store
            .scoped(|_conn| async { Err(ServiceError::Db("boom".into())) })
            .await;
        assert!(matches!(res, Err(ServiceError::Db(_))));

        // the file is not left locked by the failed unit of work
        let n = store
            .scoped(|conn| async move { crate::log_entry_service::list_log_entries(&conn).await })
            .await?;
        assert!(n.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn open_failure_is_db_error() {
        let store = LogStore::new(DatabaseConfig {
            url: "sqlite:///nonexistent-dir-for-tests/sub/logs.db?mode=rw".into(),
            sqlx_logging: false,
        });
        let res = store.initialize().await;
        assert!(matches!(res, Err(ServiceError::Db(_))));
    }
}

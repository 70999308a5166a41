#![cfg(test)]
use configs::DatabaseConfig;

use crate::log_store::LogStore;

/// Store backed by a SQLite file in its own temp directory.
pub fn temp_store() -> LogStore {
    let dir = std::env::temp_dir().join(format!("service-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    LogStore::new(DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.join("logs.db").display()),
        sqlx_logging: false,
    })
}

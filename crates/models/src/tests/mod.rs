use configs::DatabaseConfig;



/// Config pointing at a fresh SQLite file under the system temp dir.
pub(crate) fn temp_db_config() -> DatabaseConfig {
    let dir = std::env::temp_dir().join(format!("models-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.join("logs.db").display()),
        sqlx_logging: false,
    }
}

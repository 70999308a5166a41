//! Storage connection and schema bootstrap for the `logs` table.

use configs::DatabaseConfig;
use sea_orm::sea_query::{ColumnDef, Table};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::debug;

use crate::log_entry;

/// Options for a single dedicated connection; callers open one per unit of work.
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(cfg.sqlx_logging);
    opt
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    Database::connect(connect_options(cfg)).await
}

/// Create the `logs` table unless it already exists.
pub async fn init_storage<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let stmt = Table::create()
        .table(log_entry::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(log_entry::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(log_entry::Column::Method).text().not_null())
        .col(ColumnDef::new(log_entry::Column::Status).text().not_null())
        .col(ColumnDef::new(log_entry::Column::ContentType).text().null())
        .to_owned();
    let backend = db.get_database_backend();
    db.execute(backend.build(&stmt)).await?;
    debug!(table = "logs", "storage initialized");
    Ok(())
}

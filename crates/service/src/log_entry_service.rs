use models::log_entry::{self, NewLogEntry};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};
use tracing::info;

use crate::errors::ServiceError;

/// Insert one entry; the write is committed when this returns.
pub async fn create_log_entry<C: ConnectionTrait>(
    db: &C,
    entry: NewLogEntry,
) -> Result<log_entry::Model, ServiceError> {
    let am = log_entry::ActiveModel {
        method: Set(entry.method),
        status: Set(entry.status),
        content_type: Set(entry.content_type),
        ..Default::default()
    };
    let m = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(id = m.id, method = %m.method, status = %m.status, "log entry created");
    Ok(m)
}

/// Every stored entry, oldest first.
pub async fn list_log_entries<C: ConnectionTrait>(db: &C) -> Result<Vec<log_entry::Model>, ServiceError> {
    Ok(log_entry::Entity::find()
        .order_by_asc(log_entry::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

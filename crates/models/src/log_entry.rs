use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// One recorded HTTP transaction summary.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub method: String,
    #[sea_orm(column_type = "Text")]
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content_type: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Positional wire form `[id, method, status, content_type]`.
pub type LogRow = (i32, String, String, Option<String>);

impl Model {
    pub fn into_row(self) -> LogRow {
        (self.id, self.method, self.status, self.content_type)
    }
}

/// Create input with the required columns already checked for presence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewLogEntry {
    pub method: String,
    pub status: String,
    pub content_type: Option<String>,
}

impl NewLogEntry {
    pub fn new(
        method: Option<String>,
        status: Option<String>,
        content_type: Option<String>,
    ) -> Result<Self, ModelError> {
        let method = method.ok_or_else(|| ModelError::Validation("method is required".into()))?;
        let status = status.ok_or_else(|| ModelError::Validation("status is required".into()))?;
        Ok(Self { method, status, content_type })
    }
}

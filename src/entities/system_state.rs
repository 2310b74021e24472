//! System state entity - Local key-value slots.
//! The offline menu snapshot and its timestamp live here under fixed keys,
//! each stored as a string value.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// System state database model - one row per storage key
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "system_state")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Storage key (e.g., `"offline_cache"`)
    #[sea_orm(unique)]
    pub key: String,
    /// Stored value, usually JSON or an RFC 3339 timestamp
    pub value: String,
    /// When this slot was last written
    pub updated_at: DateTime,
}

/// `SystemState` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

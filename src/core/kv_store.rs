//! Local key-value persistence.
//!
//! [`KeyValueStore`] is the narrow storage boundary the offline cache writes through.
//! [`SystemStateStore`] implements it on top of the `system_state` table.

use crate::{
    entities::{SystemState, system_state},
    errors::Result,
};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{Set, prelude::*};
use tracing::trace;

/// String-valued storage addressed by key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads a value, `None` when the key was never written or was removed.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes a key. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// [`KeyValueStore`] backed by the `system_state` table.
#[derive(Debug, Clone)]
pub struct SystemStateStore {
    db: DatabaseConnection,
}

impl SystemStateStore {
    /// Wraps an open connection. Tables must already exist.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KeyValueStore for SystemStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let state = SystemState::find()
            .filter(system_state::Column::Key.eq(key))
            .one(&self.db)
            .await?;
        Ok(state.map(|s| s.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().naive_utc();

        // Check if the key exists
        let existing = SystemState::find()
            .filter(system_state::Column::Key.eq(key))
            .one(&self.db)
            .await?;

        if let Some(state) = existing {
            let mut active_model: system_state::ActiveModel = state.into();
            active_model.value = Set(value.to_string());
            active_model.updated_at = Set(now);
            active_model.update(&self.db).await?;
        } else {
            let new_state = system_state::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value.to_string()),
                updated_at: Set(now),
                ..Default::default()
            };
            new_state.insert(&self.db).await?;
        }

        trace!("Stored {} bytes under key {:?}", value.len(), key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let result = SystemState::delete_many()
            .filter(system_state::Column::Key.eq(key))
            .exec(&self.db)
            .await?;
        trace!("Removed key {:?} ({} rows)", key, result.rows_affected);
        Ok(())
    }
}

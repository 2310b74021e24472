//! Database configuration module for `CellarBuddy`.
//!
//! This module handles the local `SQLite` database connection and table creation using
//! `SeaORM`. Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust structs.

use crate::entities::{SystemState, WishlistItem};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::debug;

/// Default location of the local database file.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/cellar_buddy.sqlite?mode=rwc";

/// Resolves the database URL.
///
/// `DATABASE_URL` from the environment wins, then the value from `config.toml`,
/// then [`DEFAULT_DATABASE_URL`].
#[must_use]
pub fn get_database_url(configured: Option<&str>) -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        configured
            .map_or_else(|| DEFAULT_DATABASE_URL.to_string(), ToString::to_string)
    })
}

/// Establishes a connection to the `SQLite` database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database at {}", database_url);
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables if they do not exist yet.
///
/// Uses the `DeriveEntityModel` definitions to generate the `CREATE TABLE` statements
/// for the key-value `system_state` table and the wishlist.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut system_state_table = schema.create_table_from_entity(SystemState);
    system_state_table.if_not_exists();
    let mut wishlist_table = schema.create_table_from_entity(WishlistItem);
    wishlist_table.if_not_exists();

    db.execute(builder.build(&system_state_table)).await?;
    db.execute(builder.build(&wishlist_table)).await?;

    Ok(())
}

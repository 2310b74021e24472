//! Wishlist entity - Beverages a guest wants to remember.
//!
//! Name and price are copied from the beverage when the entry is created, so an
//! entry keeps displaying correctly after the restaurant removes the beverage.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Wishlist database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wishlist_items")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Remote id of the referenced beverage
    pub beverage_id: String,
    /// Beverage category id (e.g., "wine", `non_alcoholic`)
    pub category: String,
    /// Beverage name at the time it was added
    pub name: String,
    /// Beverage price at the time it was added
    pub price: f64,
    /// Free-text notes
    pub notes: String,
    /// When the entry was created
    pub created_at: DateTime,
    /// When the notes were last edited
    pub updated_at: DateTime,
}

/// Wishlist entries reference beverages by id only, so there are no relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

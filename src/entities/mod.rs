//! Entity module - Contains all SeaORM entity definitions for the local database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod system_state;
pub mod wishlist_item;

// Re-export specific types to avoid conflicts
pub use system_state::{
    Column as SystemStateColumn, Entity as SystemState, Model as SystemStateModel,
};
pub use wishlist_item::{
    Column as WishlistItemColumn, Entity as WishlistItem, Model as WishlistItemModel,
};

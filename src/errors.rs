//! Unified error types for `CellarBuddy`.
//!
//! Filter and match logic never fails, so the taxonomy here only covers
//! configuration, local persistence and wishlist validation.

use thiserror::Error;

/// All errors surfaced by the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or menu seed file could not be read, parsed or validated
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Local database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// JSON (de)serialization of the cached menu failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A price was negative or not a finite number
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The rejected price
        price: f64,
    },

    /// No wishlist entry with this id
    #[error("Wishlist item not found: {id}")]
    WishlistItemNotFound {
        /// The id that was looked up
        id: i64,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

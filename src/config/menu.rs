//! Menu seed loading from TOML files
//!
//! A seed file describes one restaurant and its five beverage collections. The
//! driver binary treats a loaded seed as a successful remote fetch. Keys use the
//! same camelCase names as the remote records (`inStock`, `isAvailable`, ...).

use crate::errors::{Error, Result};
use crate::models::{BeverageCategory, MenuCollections, RestaurantMeta};
use serde::Deserialize;
use std::path::Path;
use tracing::{error, info};

/// Contents of a menu seed file
#[derive(Debug, Clone, Deserialize)]
pub struct MenuSeed {
    /// Restaurant display metadata
    pub restaurant: RestaurantMeta,
    /// `[[wines]]`, `[[beers]]`, `[[spirits]]`, `[[cocktails]]`, `[[nonAlcoholic]]`
    #[serde(flatten)]
    pub collections: MenuCollections,
}

/// Rejects negative or non-finite prices anywhere in the menu.
///
/// # Errors
/// Returns `Error::InvalidPrice` for the first offending item.
pub fn validate_prices(collections: &MenuCollections) -> Result<()> {
    for category in BeverageCategory::ALL {
        for item in collections.items(category) {
            let price = item.price();
            if price < 0.0 || !price.is_finite() {
                return Err(Error::InvalidPrice { price });
            }
        }
    }
    Ok(())
}

/// Parses and validates a menu seed from a TOML string
///
/// # Errors
/// Returns an error if the TOML is invalid, required fields are missing, or a price
/// is negative.
pub fn parse_menu_seed(contents: &str) -> Result<MenuSeed> {
    let seed: MenuSeed = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse menu seed: {e}"),
    })?;
    validate_prices(&seed.collections)?;
    Ok(seed)
}

/// Loads a menu seed file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or required fields are missing
/// - Any price is negative or not finite
pub fn load_menu_seed<P: AsRef<Path>>(path: P) -> Result<MenuSeed> {
    let contents = std::fs::read_to_string(path.as_ref())
        .inspect_err(|e| error!("Failed to read menu seed {:?}: {}", path.as_ref(), e))?;
    let seed = parse_menu_seed(&contents)?;
    info!(
        "Loaded menu for {:?} with {} items",
        seed.restaurant.name,
        seed.collections.len()
    );
    Ok(seed)
}

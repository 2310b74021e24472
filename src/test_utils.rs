//! Shared test utilities for `CellarBuddy`.
//!
//! This module provides common helper functions for setting up test databases
//! and building beverages with sensible defaults.

use crate::{
    errors::Result,
    models::{
        Beer, Cocktail, FlavorProfile, MenuCollections, NonAlcoholicBeverage, Spirit, Wine,
    },
};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// An in-stock red wine named `"Test Wine {id}"` with a neutral profile.
pub fn test_wine(id: &str, price: f64) -> Wine {
    Wine {
        id: id.to_string(),
        name: format!("Test Wine {id}"),
        price,
        in_stock: true,
        wine_type: "red".to_string(),
        region: "Rioja".to_string(),
        grape: "Tempranillo".to_string(),
        vintage: None,
        featured: false,
        flavor_profile: Some(FlavorProfile::default()),
        food_pairings: Vec::new(),
        description: None,
    }
}

/// An in-stock lager named `"Test Beer {id}"`.
pub fn test_beer(id: &str, price: f64) -> Beer {
    Beer {
        id: id.to_string(),
        name: format!("Test Beer {id}"),
        price,
        in_stock: true,
        brewery: "Test Brewing Co".to_string(),
        style: "Lager".to_string(),
        abv: Some(4.8),
        description: None,
    }
}

/// An in-stock gin named `"Test Spirit {id}"`.
pub fn test_spirit(id: &str, price: f64) -> Spirit {
    Spirit {
        id: id.to_string(),
        name: format!("Test Spirit {id}"),
        price,
        in_stock: true,
        spirit_type: "Gin".to_string(),
        distillery: None,
        age_years: None,
        description: None,
    }
}

/// An available cocktail named `"Test Cocktail {id}"`.
pub fn test_cocktail(id: &str, price: f64) -> Cocktail {
    Cocktail {
        id: id.to_string(),
        name: format!("Test Cocktail {id}"),
        price,
        is_available: true,
        base_spirit: "Rum".to_string(),
        ingredients: vec!["Rum".to_string(), "Lime".to_string(), "Sugar".to_string()],
        featured: false,
        description: None,
    }
}

/// An in-stock soft drink named `"Test Drink {id}"`.
pub fn test_non_alcoholic(id: &str, price: f64) -> NonAlcoholicBeverage {
    NonAlcoholicBeverage {
        id: id.to_string(),
        name: format!("Test Drink {id}"),
        price,
        in_stock: true,
        beverage_type: "Soda".to_string(),
        description: None,
    }
}

/// A small menu with every category populated, one unavailable item and two
/// featured items.
pub fn sample_menu() -> MenuCollections {
    MenuCollections {
        wines: vec![
            Wine {
                featured: true,
                food_pairings: vec!["Grilled salmon".to_string()],
                ..test_wine("w1", 38.0)
            },
            Wine {
                in_stock: false,
                ..test_wine("w2", 64.0)
            },
        ],
        beers: vec![test_beer("b1", 7.0)],
        spirits: vec![test_spirit("s1", 12.0)],
        cocktails: vec![Cocktail {
            featured: true,
            ..test_cocktail("c1", 14.0)
        }],
        non_alcoholic: vec![test_non_alcoholic("n1", 4.5)],
    }
}

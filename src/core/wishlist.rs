//! Wishlist business logic - Beverages a guest wants to remember for later.
//!
//! Entries copy the beverage's name and price at creation time and reference the
//! beverage only by id, so they keep displaying after the beverage is removed from
//! the menu. All functions are async and return Result types for error handling.

use crate::{
    entities::{WishlistItem, wishlist_item},
    errors::{Error, Result},
    models::BeverageItem,
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::{debug, info};

/// Adds a beverage to the wishlist with optional notes.
///
/// # Errors
/// Returns an error if:
/// - The beverage name is empty or whitespace-only
/// - The price is negative or not finite (NaN, infinity)
/// - The database insert operation fails
pub async fn add_to_wishlist(
    db: &DatabaseConnection,
    beverage: &BeverageItem,
    notes: Option<String>,
) -> Result<wishlist_item::Model> {
    let name = beverage.name().trim();
    if name.is_empty() {
        return Err(Error::Config {
            message: "Wishlist entry name cannot be empty".to_string(),
        });
    }

    let price = beverage.price();
    if price < 0.0 || !price.is_finite() {
        return Err(Error::InvalidPrice { price });
    }

    let now = chrono::Utc::now().naive_utc();
    let entry = wishlist_item::ActiveModel {
        beverage_id: Set(beverage.id().to_string()),
        category: Set(beverage.category().as_str().to_string()),
        name: Set(name.to_string()),
        price: Set(price),
        notes: Set(notes.unwrap_or_default()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = entry.insert(db).await?;
    info!("Added {:?} to wishlist as entry {}", model.name, model.id);
    Ok(model)
}

/// All wishlist entries, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_wishlist(db: &DatabaseConnection) -> Result<Vec<wishlist_item::Model>> {
    WishlistItem::find()
        .order_by_desc(wishlist_item::Column::CreatedAt)
        .order_by_desc(wishlist_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves one entry by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_wishlist_item(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<wishlist_item::Model>> {
    WishlistItem::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Whether any entry references this beverage.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn is_in_wishlist(db: &DatabaseConnection, beverage_id: &str) -> Result<bool> {
    let count = WishlistItem::find()
        .filter(wishlist_item::Column::BeverageId.eq(beverage_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Replaces the notes of an entry.
///
/// # Errors
/// Returns an error if:
/// - The entry does not exist
/// - The database update operation fails
pub async fn update_wishlist_notes(
    db: &DatabaseConnection,
    id: i64,
    notes: String,
) -> Result<wishlist_item::Model> {
    let mut entry: wishlist_item::ActiveModel = WishlistItem::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::WishlistItemNotFound { id })?
        .into();

    entry.notes = Set(notes);
    entry.updated_at = Set(chrono::Utc::now().naive_utc());

    entry.update(db).await.map_err(Into::into)
}

/// Deletes a single entry.
///
/// # Errors
/// Returns an error if:
/// - The entry does not exist
/// - The database delete operation fails
pub async fn remove_from_wishlist(db: &DatabaseConnection, id: i64) -> Result<()> {
    let result = WishlistItem::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::WishlistItemNotFound { id });
    }
    debug!("Removed wishlist entry {}", id);
    Ok(())
}

/// Deletes every entry, returning how many were removed.
///
/// # Errors
/// Returns an error if the database delete operation fails.
pub async fn clear_wishlist(db: &DatabaseConnection) -> Result<u64> {
    let result = WishlistItem::delete_many().exec(db).await?;
    info!("Cleared {} wishlist entries", result.rows_affected);
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::models::{Beer, Wine};
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_add_to_wishlist_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let unnamed = BeverageItem::Wine(Wine {
            name: "   ".to_string(),
            ..test_wine("w1", 30.0)
        });
        let result = add_to_wishlist(&db, &unnamed, None).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let negative = BeverageItem::Beer(test_beer("b1", -4.0));
        let result = add_to_wishlist(&db, &negative, None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidPrice { price } if price == -4.0
        ));

        let nan = BeverageItem::Beer(Beer {
            price: f64::NAN,
            ..test_beer("b2", 0.0)
        });
        let result = add_to_wishlist(&db, &nan, None).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidPrice { price: _ }));

        // Rejected entries never reach the table
        assert!(get_wishlist(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_add_and_list_wishlist() -> Result<()> {
        let db = setup_test_db().await?;

        let first = add_to_wishlist(
            &db,
            &BeverageItem::Wine(test_wine("w1", 42.0)),
            Some("Anniversary dinner".to_string()),
        )
        .await?;
        let second = add_to_wishlist(&db, &BeverageItem::Beer(test_beer("b1", 7.5)), None).await?;

        assert_eq!(first.beverage_id, "w1");
        assert_eq!(first.category, "wine");
        assert_eq!(first.price, 42.0);
        assert_eq!(first.notes, "Anniversary dinner");
        assert_eq!(second.notes, "");

        let entries = get_wishlist(&db).await?;
        assert_eq!(entries.len(), 2);
        // Newest first
        assert_eq!(entries[0].id, second.id);
        assert_eq!(entries[1].id, first.id);

        assert!(is_in_wishlist(&db, "w1").await?);
        assert!(!is_in_wishlist(&db, "w404").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_entry_keeps_denormalized_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let entry = {
            // The source beverage goes out of scope; only the entry remains
            let wine = test_wine("w1", 42.0);
            add_to_wishlist(&db, &BeverageItem::Wine(wine), None).await?
        };

        let stored = get_wishlist_item(&db, entry.id).await?.unwrap();
        assert_eq!(stored.name, entry.name);
        assert_eq!(stored.price, 42.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_notes() -> Result<()> {
        let db = setup_test_db().await?;
        let entry = add_to_wishlist(&db, &BeverageItem::Beer(test_beer("b1", 6.0)), None).await?;

        let updated = update_wishlist_notes(&db, entry.id, "Try with tacos".to_string()).await?;
        assert_eq!(updated.notes, "Try with tacos");
        assert!(updated.updated_at >= entry.updated_at);

        let missing = update_wishlist_notes(&db, 999, "x".to_string()).await;
        assert!(matches!(
            missing.unwrap_err(),
            Error::WishlistItemNotFound { id: 999 }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_and_clear() -> Result<()> {
        let db = setup_test_db().await?;
        let a = add_to_wishlist(&db, &BeverageItem::Beer(test_beer("b1", 6.0)), None).await?;
        add_to_wishlist(&db, &BeverageItem::Spirit(test_spirit("s1", 11.0)), None).await?;
        add_to_wishlist(&db, &BeverageItem::Cocktail(test_cocktail("c1", 13.0)), None).await?;

        remove_from_wishlist(&db, a.id).await?;
        assert!(get_wishlist_item(&db, a.id).await?.is_none());
        assert!(matches!(
            remove_from_wishlist(&db, a.id).await.unwrap_err(),
            Error::WishlistItemNotFound { .. }
        ));

        assert_eq!(clear_wishlist(&db).await?, 2);
        assert!(get_wishlist(&db).await?.is_empty());
        assert_eq!(clear_wishlist(&db).await?, 0);
        Ok(())
    }
}

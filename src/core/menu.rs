//! Menu aggregation - turns the five raw beverage collections into customer views.
//!
//! Everything here is a pure projection over borrowed collections: nothing is
//! mutated and the same inputs always produce the same view, so callers can
//! recompute on every render.

use crate::{
    core::{cuisine::CuisineMatcher, flavor::FlavorRangeFilters},
    models::{BeverageCategory, BeverageItem, MenuCollections, Wine},
};
use std::collections::HashMap;

/// Featured wines and cocktails each contribute at most this many items.
const FEATURED_PER_SOURCE: usize = 2;
/// Size cap of the highlights carousel.
pub const FEATURED_LIMIT: usize = 4;

/// Which part of the menu the customer is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every non-empty section
    #[default]
    All,
    /// A single section
    Only(BeverageCategory),
}

impl CategoryFilter {
    /// Whether a section of this category is visible under the filter.
    #[must_use]
    pub fn includes(self, category: BeverageCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Parses `"all"` or a category id such as `"beer"`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        if id == "all" {
            return Some(Self::All);
        }
        BeverageCategory::from_id(id).map(Self::Only)
    }
}

/// One rendered section of the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    /// Category of every item in the section
    pub category: BeverageCategory,
    /// Items available for sale, in source order
    pub items: Vec<BeverageItem>,
}

/// The customer-facing menu under a category selection.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    /// Visible, non-empty sections in display order
    pub sections: Vec<MenuSection>,
    /// Highlights carousel
    pub featured: Vec<BeverageItem>,
    /// Counts over the whole menu, independent of the category selection
    pub stats: MenuStats,
}

impl MenuView {
    /// True only when no section has anything to show.
    #[must_use]
    pub fn show_empty_state(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section for a category, if it is visible.
    #[must_use]
    pub fn section(&self, category: BeverageCategory) -> Option<&MenuSection> {
        self.sections.iter().find(|s| s.category == category)
    }
}

/// Price and count summary of one category's available items.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryStats {
    /// Number of items available for sale
    pub count: usize,
    /// Mean price, `None` for an empty category
    pub average_price: Option<f64>,
    /// Cheapest item price
    pub min_price: Option<f64>,
    /// Most expensive item price
    pub max_price: Option<f64>,
}

/// Aggregate counts across the five available subsets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuStats {
    /// Per-category summary
    pub by_category: HashMap<BeverageCategory, CategoryStats>,
    /// Sum of the per-category counts
    pub total: usize,
}

impl MenuStats {
    /// Available item count of one category (zero when absent).
    #[must_use]
    pub fn count(&self, category: BeverageCategory) -> usize {
        self.by_category.get(&category).map_or(0, |s| s.count)
    }
}

/// Items of one category the restaurant currently sells, in insertion order.
#[must_use]
pub fn available_items(
    collections: &MenuCollections,
    category: BeverageCategory,
) -> Vec<BeverageItem> {
    collections
        .items(category)
        .into_iter()
        .filter(BeverageItem::is_available_for_sale)
        .collect()
}

/// Highlights carousel: the first two available featured wines followed by the
/// first two available featured cocktails, never more than [`FEATURED_LIMIT`].
#[must_use]
pub fn featured_items(collections: &MenuCollections) -> Vec<BeverageItem> {
    [BeverageCategory::Wine, BeverageCategory::Cocktail]
        .into_iter()
        .flat_map(|category| {
            available_items(collections, category)
                .into_iter()
                .filter(BeverageItem::is_featured)
                .take(FEATURED_PER_SOURCE)
        })
        .take(FEATURED_LIMIT)
        .collect()
}

/// Summarizes a list of already-filtered items.
#[must_use]
pub fn category_stats(items: &[BeverageItem]) -> CategoryStats {
    if items.is_empty() {
        return CategoryStats::default();
    }

    let prices = items.iter().map(BeverageItem::price);
    let sum: f64 = prices.clone().sum();
    #[allow(clippy::cast_precision_loss)]
    let average = sum / items.len() as f64;

    CategoryStats {
        count: items.len(),
        average_price: Some(average),
        min_price: prices.clone().reduce(f64::min),
        max_price: prices.reduce(f64::max),
    }
}

/// Per-category and total counts over the available subsets.
#[must_use]
pub fn menu_stats(collections: &MenuCollections) -> MenuStats {
    let by_category: HashMap<BeverageCategory, CategoryStats> = BeverageCategory::ALL
        .into_iter()
        .map(|category| (category, category_stats(&available_items(collections, category))))
        .collect();
    let total = by_category.values().map(|s| s.count).sum();

    MenuStats { by_category, total }
}

/// Builds the menu as customers see it under `filter`.
///
/// Sections with no available items are dropped rather than rendered empty.
#[must_use]
pub fn build_menu_view(collections: &MenuCollections, filter: CategoryFilter) -> MenuView {
    let sections = BeverageCategory::ALL
        .into_iter()
        .filter(|category| filter.includes(*category))
        .map(|category| MenuSection {
            category,
            items: available_items(collections, category),
        })
        .filter(|section| !section.items.is_empty())
        .collect();

    MenuView {
        sections,
        featured: featured_items(collections),
        stats: menu_stats(collections),
    }
}

/// Available wines that pass both the flavor sliders and the cuisine selection.
#[must_use]
pub fn browse_wines<'a>(
    wines: &'a [Wine],
    flavor_filters: &FlavorRangeFilters,
    cuisine_id: &str,
    matcher: &CuisineMatcher,
) -> Vec<&'a Wine> {
    wines
        .iter()
        .filter(|w| w.in_stock)
        .filter(|w| flavor_filters.matches(w.flavor_profile.as_ref()))
        .filter(|w| matcher.matches(&w.food_pairings, cuisine_id))
        .collect()
}

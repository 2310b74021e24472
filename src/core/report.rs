//! Plain-text menu rendering.
//!
//! This module turns a [`MenuView`] into the text printed by the command-line driver.
//! All functions are pure and return strings that the caller prints or logs.

use crate::{
    core::{
        flavor::FlavorDimension,
        menu::{MenuSection, MenuView},
        offline_cache::MenuSource,
    },
    models::{BeverageCategory, BeverageItem, FlavorProfile, RestaurantMeta},
};
use std::fmt::Write;

/// Formats a price with two decimals, e.g. `"$12.50"`.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Renders a profile as dots on the 1-5 scale: `Body ●●●○○ · Sweetness ●○○○○ ...`.
#[must_use]
pub fn format_flavor_profile(profile: &FlavorProfile) -> String {
    FlavorDimension::ALL
        .iter()
        .map(|d| {
            let filled = usize::from(d.value_of(profile).min(5));
            format!("{} {}{}", d.label(), "●".repeat(filled), "○".repeat(5 - filled))
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

/// One listing line: name, subtitle and price.
#[must_use]
pub fn format_item_line(item: &BeverageItem) -> String {
    let subtitle = item.subtitle();
    let star = if item.is_featured() { " ★" } else { "" };
    if subtitle.trim().is_empty() {
        format!("{}{star} - {}", item.name(), format_price(item.price()))
    } else {
        format!(
            "{}{star} ({subtitle}) - {}",
            item.name(),
            format_price(item.price())
        )
    }
}

fn format_section(out: &mut String, section: &MenuSection) {
    let _ = writeln!(out, "\n{} ({})", section.category.label(), section.items.len());
    for item in &section.items {
        let _ = writeln!(out, "  • {}", format_item_line(item));
        if let Some(profile) = item.flavor_profile() {
            let _ = writeln!(out, "      {}", format_flavor_profile(profile));
        }
    }
}

/// Full menu report: header, optional offline banner, highlights, sections and counts.
#[must_use]
pub fn format_menu_report(
    restaurant: &RestaurantMeta,
    view: &MenuView,
    source: &MenuSource,
) -> String {
    let mut out = String::new();

    match &restaurant.cuisine {
        Some(cuisine) => {
            let _ = writeln!(out, "**{}** · {cuisine}", restaurant.name);
        }
        None => {
            let _ = writeln!(out, "**{}**", restaurant.name);
        }
    }

    if let Some(banner) = source.banner() {
        let _ = writeln!(out, "[Offline mode] {banner}");
    }

    if view.show_empty_state() {
        let _ = writeln!(out, "\nNo beverages available right now.");
        return out;
    }

    if !view.featured.is_empty() {
        let _ = writeln!(out, "\nHighlights");
        for item in &view.featured {
            let _ = writeln!(out, "  ★ {}", format_item_line(item));
        }
    }

    for section in &view.sections {
        format_section(&mut out, section);
    }

    let counts = BeverageCategory::ALL
        .iter()
        .map(|c| format!("{} {}", view.stats.count(*c), c.label().to_lowercase()))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "\n{} items available ({counts})", view.stats.total);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::{CategoryFilter, build_menu_view};
    use crate::models::{MenuCollections, Wine};
    use crate::test_utils::*;

    fn restaurant() -> RestaurantMeta {
        RestaurantMeta {
            name: "Cellar Door".to_string(),
            cuisine: Some("Seafood".to_string()),
            cover_image: None,
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_flavor_profile() {
        let profile = FlavorProfile {
            body: 5,
            sweetness: 1,
            tannins: 3,
            acidity: 2,
        };
        assert_eq!(
            format_flavor_profile(&profile),
            "Body ●●●●● · Sweetness ●○○○○ · Tannins ●●●○○ · Acidity ●●○○○"
        );
    }

    #[test]
    fn test_format_item_line_marks_featured() {
        let wine = Wine {
            featured: true,
            grape: "Riesling".to_string(),
            region: "Mosel".to_string(),
            vintage: Some(2019),
            ..test_wine("w1", 48.0)
        };
        assert_eq!(
            format_item_line(&BeverageItem::Wine(wine)),
            "Test Wine w1 ★ (Riesling · Mosel · 2019) - $48.00"
        );
    }

    #[test]
    fn test_report_shows_offline_banner_and_counts() {
        let menu = sample_menu();
        let view = build_menu_view(&menu, CategoryFilter::All);
        let source = MenuSource::Cached {
            label: "Cached 2 days ago".to_string(),
        };

        let report = format_menu_report(&restaurant(), &view, &source);
        assert!(report.starts_with("**Cellar Door** · Seafood"));
        assert!(report.contains("[Offline mode] Cached 2 days ago"));
        assert!(report.contains(&format!("{} items available", view.stats.total)));
    }

    #[test]
    fn test_report_empty_state() {
        let view = build_menu_view(&MenuCollections::default(), CategoryFilter::All);
        let report = format_menu_report(&restaurant(), &view, &MenuSource::Live);
        assert!(report.contains("No beverages available right now."));
        assert!(!report.contains("Offline mode"));
    }
}

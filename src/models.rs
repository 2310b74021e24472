//! Beverage domain types shared by the filters, the menu aggregator and the offline cache.
//!
//! Field names serialize in camelCase so the cached JSON matches the payloads
//! delivered by the remote beverage collections (`inStock`, `isAvailable`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Neutral value used for any flavor dimension a record does not carry.
pub const NEUTRAL_FLAVOR: u8 = 3;

const fn neutral_flavor() -> u8 {
    NEUTRAL_FLAVOR
}

/// The five beverage collections a restaurant menu is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeverageCategory {
    /// Wines, the only category with flavor profiles
    Wine,
    /// Beers
    Beer,
    /// Spirits
    Spirit,
    /// Cocktails
    Cocktail,
    /// Non-alcoholic drinks
    NonAlcoholic,
}

impl BeverageCategory {
    /// Every category, in menu display order.
    pub const ALL: [Self; 5] = [
        Self::Wine,
        Self::Beer,
        Self::Spirit,
        Self::Cocktail,
        Self::NonAlcoholic,
    ];

    /// Stable identifier, also used when persisting wishlist entries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wine => "wine",
            Self::Beer => "beer",
            Self::Spirit => "spirit",
            Self::Cocktail => "cocktail",
            Self::NonAlcoholic => "non_alcoholic",
        }
    }

    /// Section heading shown to customers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wine => "Wines",
            Self::Beer => "Beers",
            Self::Spirit => "Spirits",
            Self::Cocktail => "Cocktails",
            Self::NonAlcoholic => "Non-Alcoholic",
        }
    }

    /// Parses the identifier produced by [`BeverageCategory::as_str`].
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == id)
    }
}

impl fmt::Display for BeverageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-dimensional wine flavor profile, each dimension on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorProfile {
    /// Light (1) to full-bodied (5)
    #[serde(default = "neutral_flavor")]
    pub body: u8,
    /// Bone dry (1) to sweet (5)
    #[serde(default = "neutral_flavor")]
    pub sweetness: u8,
    /// Soft (1) to grippy (5)
    #[serde(default = "neutral_flavor")]
    pub tannins: u8,
    /// Flat (1) to crisp (5)
    #[serde(default = "neutral_flavor")]
    pub acidity: u8,
}

impl Default for FlavorProfile {
    fn default() -> Self {
        Self {
            body: NEUTRAL_FLAVOR,
            sweetness: NEUTRAL_FLAVOR,
            tannins: NEUTRAL_FLAVOR,
            acidity: NEUTRAL_FLAVOR,
        }
    }
}

/// A wine on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wine {
    /// Remote record id
    pub id: String,
    /// Display name
    pub name: String,
    /// Price in the restaurant's local currency
    pub price: f64,
    /// Whether the restaurant currently sells it
    pub in_stock: bool,
    /// Red, white, rosé, sparkling, ...
    #[serde(default)]
    pub wine_type: String,
    /// Growing region
    #[serde(default)]
    pub region: String,
    /// Grape variety or blend
    #[serde(default)]
    pub grape: String,
    /// Harvest year, absent for non-vintage wines
    #[serde(default)]
    pub vintage: Option<i32>,
    /// Shown in the highlights carousel
    #[serde(default)]
    pub featured: bool,
    /// Absent for records created before profiles were tracked
    #[serde(default)]
    pub flavor_profile: Option<FlavorProfile>,
    /// Free-text pairing suggestions ("grilled salmon", "aged cheddar")
    #[serde(default)]
    pub food_pairings: Vec<String>,
    /// Tasting notes
    #[serde(default)]
    pub description: Option<String>,
}

impl Wine {
    /// The stored profile, or the neutral profile for legacy records.
    #[must_use]
    pub fn profile_or_neutral(&self) -> FlavorProfile {
        self.flavor_profile.unwrap_or_default()
    }
}

/// A beer on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    /// Remote record id
    pub id: String,
    /// Display name
    pub name: String,
    /// Price in the restaurant's local currency
    pub price: f64,
    /// Whether the restaurant currently sells it
    pub in_stock: bool,
    /// Producer
    #[serde(default)]
    pub brewery: String,
    /// IPA, stout, lager, ...
    #[serde(default)]
    pub style: String,
    /// Alcohol by volume, in percent
    #[serde(default)]
    pub abv: Option<f64>,
    /// Tasting notes
    #[serde(default)]
    pub description: Option<String>,
}

/// A spirit on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spirit {
    /// Remote record id
    pub id: String,
    /// Display name
    pub name: String,
    /// Price in the restaurant's local currency
    pub price: f64,
    /// Whether the restaurant currently sells it
    pub in_stock: bool,
    /// Whisky, gin, rum, ...
    #[serde(default)]
    pub spirit_type: String,
    /// Producer
    #[serde(default)]
    pub distillery: Option<String>,
    /// Age statement in years
    #[serde(default)]
    pub age_years: Option<u32>,
    /// Tasting notes
    #[serde(default)]
    pub description: Option<String>,
}

/// A cocktail on the menu. Availability is tracked as `isAvailable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cocktail {
    /// Remote record id
    pub id: String,
    /// Display name
    pub name: String,
    /// Price in the restaurant's local currency
    pub price: f64,
    /// Whether the bar is currently making it
    pub is_available: bool,
    /// Main spirit
    #[serde(default)]
    pub base_spirit: String,
    /// Recipe components
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Shown in the highlights carousel
    #[serde(default)]
    pub featured: bool,
    /// Menu description
    #[serde(default)]
    pub description: Option<String>,
}

/// A non-alcoholic drink on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonAlcoholicBeverage {
    /// Remote record id
    pub id: String,
    /// Display name
    pub name: String,
    /// Price in the restaurant's local currency
    pub price: f64,
    /// Whether the restaurant currently sells it
    pub in_stock: bool,
    /// Juice, soda, mocktail, ...
    #[serde(default)]
    pub beverage_type: String,
    /// Menu description
    #[serde(default)]
    pub description: Option<String>,
}

/// Any single menu item, tagged by its category.
#[derive(Debug, Clone, PartialEq)]
pub enum BeverageItem {
    /// See [`Wine`]
    Wine(Wine),
    /// See [`Beer`]
    Beer(Beer),
    /// See [`Spirit`]
    Spirit(Spirit),
    /// See [`Cocktail`]
    Cocktail(Cocktail),
    /// See [`NonAlcoholicBeverage`]
    NonAlcoholic(NonAlcoholicBeverage),
}

impl BeverageItem {
    /// Category tag of the variant.
    #[must_use]
    pub const fn category(&self) -> BeverageCategory {
        match self {
            Self::Wine(_) => BeverageCategory::Wine,
            Self::Beer(_) => BeverageCategory::Beer,
            Self::Spirit(_) => BeverageCategory::Spirit,
            Self::Cocktail(_) => BeverageCategory::Cocktail,
            Self::NonAlcoholic(_) => BeverageCategory::NonAlcoholic,
        }
    }

    /// Remote record id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Wine(w) => &w.id,
            Self::Beer(b) => &b.id,
            Self::Spirit(s) => &s.id,
            Self::Cocktail(c) => &c.id,
            Self::NonAlcoholic(n) => &n.id,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Wine(w) => &w.name,
            Self::Beer(b) => &b.name,
            Self::Spirit(s) => &s.name,
            Self::Cocktail(c) => &c.name,
            Self::NonAlcoholic(n) => &n.name,
        }
    }

    /// Price in local currency.
    #[must_use]
    pub const fn price(&self) -> f64 {
        match self {
            Self::Wine(w) => w.price,
            Self::Beer(b) => b.price,
            Self::Spirit(s) => s.price,
            Self::Cocktail(c) => c.price,
            Self::NonAlcoholic(n) => n.price,
        }
    }

    /// Normalized availability: `inStock` for most variants, `isAvailable` for cocktails.
    #[must_use]
    pub const fn is_available_for_sale(&self) -> bool {
        match self {
            Self::Wine(w) => w.in_stock,
            Self::Beer(b) => b.in_stock,
            Self::Spirit(s) => s.in_stock,
            Self::Cocktail(c) => c.is_available,
            Self::NonAlcoholic(n) => n.in_stock,
        }
    }

    /// Whether the item is flagged for the highlights carousel.
    #[must_use]
    pub const fn is_featured(&self) -> bool {
        match self {
            Self::Wine(w) => w.featured,
            Self::Cocktail(c) => c.featured,
            Self::Beer(_) | Self::Spirit(_) | Self::NonAlcoholic(_) => false,
        }
    }

    /// Free-text food pairings; only wines carry them.
    #[must_use]
    pub fn food_pairings(&self) -> &[String] {
        match self {
            Self::Wine(w) => &w.food_pairings,
            _ => &[],
        }
    }

    /// Flavor profile; only wines carry one.
    #[must_use]
    pub const fn flavor_profile(&self) -> Option<&FlavorProfile> {
        match self {
            Self::Wine(w) => w.flavor_profile.as_ref(),
            _ => None,
        }
    }

    /// One-line secondary description used in listings (region, brewery, ...).
    #[must_use]
    pub fn subtitle(&self) -> String {
        match self {
            Self::Wine(w) => match w.vintage {
                Some(year) => format!("{} · {} · {year}", w.grape, w.region),
                None => format!("{} · {}", w.grape, w.region),
            },
            Self::Beer(b) => format!("{} · {}", b.brewery, b.style),
            Self::Spirit(s) => s.distillery.as_ref().map_or_else(
                || s.spirit_type.clone(),
                |d| format!("{} · {d}", s.spirit_type),
            ),
            Self::Cocktail(c) => c.base_spirit.clone(),
            Self::NonAlcoholic(n) => n.beverage_type.clone(),
        }
    }
}

/// The five raw beverage collections as delivered by the remote store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCollections {
    /// Wine list
    #[serde(default)]
    pub wines: Vec<Wine>,
    /// Beer list
    #[serde(default)]
    pub beers: Vec<Beer>,
    /// Spirit list
    #[serde(default)]
    pub spirits: Vec<Spirit>,
    /// Cocktail list
    #[serde(default)]
    pub cocktails: Vec<Cocktail>,
    /// Non-alcoholic list
    #[serde(default)]
    pub non_alcoholic: Vec<NonAlcoholicBeverage>,
}

impl MenuCollections {
    /// Every item of one category wrapped in [`BeverageItem`], in insertion order.
    #[must_use]
    pub fn items(&self, category: BeverageCategory) -> Vec<BeverageItem> {
        match category {
            BeverageCategory::Wine => self.wines.iter().cloned().map(BeverageItem::Wine).collect(),
            BeverageCategory::Beer => self.beers.iter().cloned().map(BeverageItem::Beer).collect(),
            BeverageCategory::Spirit => self
                .spirits
                .iter()
                .cloned()
                .map(BeverageItem::Spirit)
                .collect(),
            BeverageCategory::Cocktail => self
                .cocktails
                .iter()
                .cloned()
                .map(BeverageItem::Cocktail)
                .collect(),
            BeverageCategory::NonAlcoholic => self
                .non_alcoholic
                .iter()
                .cloned()
                .map(BeverageItem::NonAlcoholic)
                .collect(),
        }
    }

    /// Total number of raw records, available or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wines.len()
            + self.beers.len()
            + self.spirits.len()
            + self.cocktails.len()
            + self.non_alcoholic.len()
    }

    /// True when all five collections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Restaurant display metadata stored alongside a cached menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantMeta {
    /// Restaurant name
    pub name: String,
    /// Cuisine description ("Italian", "Seafood")
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Cover image URL
    #[serde(default)]
    pub cover_image: Option<String>,
}

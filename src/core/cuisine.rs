//! Cuisine matching against free-text food pairings.
//!
//! Pairings are entered by restaurant staff (or suggested by the assistant) and do
//! not follow any taxonomy, so matching is a permissive keyword substring search:
//! "fish" matches "fish tacos" and "swordfish" alike.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Id of the catch-all category.
pub const ALL_CUISINES: &str = "all";

/// A selectable cuisine with the keywords that identify it in pairing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuisineCategory {
    /// Stable identifier used by the UI selection
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Lowercase keywords searched for in the pairing text
    pub keywords: &'static [&'static str],
}

static CUISINE_CATEGORIES: [CuisineCategory; 10] = [
    CuisineCategory {
        id: ALL_CUISINES,
        label: "All",
        keywords: &[],
    },
    CuisineCategory {
        id: "seafood",
        label: "Seafood",
        keywords: &[
            "fish", "salmon", "tuna", "shrimp", "prawn", "lobster", "crab", "oyster", "scallop",
            "mussel", "clam", "seafood", "shellfish", "sushi", "cod", "halibut",
        ],
    },
    CuisineCategory {
        id: "steak",
        label: "Steak & Red Meat",
        keywords: &[
            "steak", "beef", "lamb", "venison", "ribeye", "brisket", "burger", "red meat",
            "short rib", "veal",
        ],
    },
    CuisineCategory {
        id: "poultry",
        label: "Poultry",
        keywords: &["chicken", "turkey", "duck", "poultry", "quail", "goose"],
    },
    CuisineCategory {
        id: "pork",
        label: "Pork",
        keywords: &["pork", "ham", "bacon", "sausage", "charcuterie", "prosciutto"],
    },
    CuisineCategory {
        id: "italian",
        label: "Italian",
        keywords: &[
            "pasta", "pizza", "risotto", "italian", "lasagna", "tomato", "parmesan", "pesto",
        ],
    },
    CuisineCategory {
        id: "asian",
        label: "Asian",
        keywords: &[
            "asian", "thai", "chinese", "japanese", "curry", "sushi", "dim sum", "stir fry",
            "spicy", "korean", "vietnamese",
        ],
    },
    CuisineCategory {
        id: "mexican",
        label: "Mexican",
        keywords: &["mexican", "taco", "burrito", "enchilada", "mole", "salsa", "chili"],
    },
    CuisineCategory {
        id: "cheese",
        label: "Cheese",
        keywords: &[
            "cheese", "brie", "cheddar", "gouda", "camembert", "blue cheese", "goat cheese",
            "manchego",
        ],
    },
    CuisineCategory {
        id: "dessert",
        label: "Dessert",
        keywords: &[
            "dessert", "chocolate", "cake", "tart", "fruit", "creme brulee", "ice cream", "pie",
        ],
    },
];

/// The static cuisine list, with `all` first.
#[must_use]
pub fn cuisine_categories() -> &'static [CuisineCategory] {
    &CUISINE_CATEGORIES
}

/// Looks up a cuisine by id.
#[must_use]
pub fn find_cuisine(id: &str) -> Option<&'static CuisineCategory> {
    CUISINE_CATEGORIES.iter().find(|c| c.id == id)
}

/// What to do with a cuisine id that is not in the static list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCuisinePolicy {
    /// Treat the unknown id like `all` (the long-standing behavior)
    #[default]
    MatchAll,
    /// Treat the unknown id as matching nothing
    MatchNone,
}

/// Matches pairing text against the static cuisine list.
#[derive(Debug, Clone, Copy, Default)]
pub struct CuisineMatcher {
    unknown_policy: UnknownCuisinePolicy,
}

impl CuisineMatcher {
    /// Creates a matcher with an explicit unknown-id policy.
    #[must_use]
    pub const fn new(unknown_policy: UnknownCuisinePolicy) -> Self {
        Self { unknown_policy }
    }

    /// The configured unknown-id policy.
    #[must_use]
    pub const fn unknown_policy(&self) -> UnknownCuisinePolicy {
        self.unknown_policy
    }

    /// True when any keyword of `cuisine_id` appears, case-insensitively, anywhere in
    /// the space-joined pairing list. `all` always matches, even an empty list.
    #[must_use]
    pub fn matches(&self, food_pairings: &[String], cuisine_id: &str) -> bool {
        if cuisine_id == ALL_CUISINES {
            return true;
        }

        let Some(cuisine) = find_cuisine(cuisine_id) else {
            trace!(
                "Unknown cuisine id {:?}, applying {:?}",
                cuisine_id, self.unknown_policy
            );
            return self.unknown_policy == UnknownCuisinePolicy::MatchAll;
        };

        let text = food_pairings.join(" ").to_lowercase();
        cuisine.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

//! Flavor range filtering for the wine browser.
//!
//! Each of the four flavor dimensions carries an inclusive `[min, max]` selection
//! manipulated by two handles. A wine passes when every dimension of its profile
//! lies inside the selected range. The handle operations below keep
//! `FLAVOR_MIN <= min <= max <= FLAVOR_MAX` after every single move.

use crate::models::FlavorProfile;
use std::cmp::Ordering;

/// Lowest point on the flavor scale.
pub const FLAVOR_MIN: u8 = 1;
/// Highest point on the flavor scale.
pub const FLAVOR_MAX: u8 = 5;

/// One of the four dimensions of a [`FlavorProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlavorDimension {
    /// Body
    Body,
    /// Sweetness
    Sweetness,
    /// Tannins
    Tannins,
    /// Acidity
    Acidity,
}

impl FlavorDimension {
    /// All dimensions in display order.
    pub const ALL: [Self; 4] = [Self::Body, Self::Sweetness, Self::Tannins, Self::Acidity];

    /// Reads this dimension from a profile.
    #[must_use]
    pub const fn value_of(self, profile: &FlavorProfile) -> u8 {
        match self {
            Self::Body => profile.body,
            Self::Sweetness => profile.sweetness,
            Self::Tannins => profile.tannins,
            Self::Acidity => profile.acidity,
        }
    }

    /// Label shown next to the slider.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Body => "Body",
            Self::Sweetness => "Sweetness",
            Self::Tannins => "Tannins",
            Self::Acidity => "Acidity",
        }
    }
}

/// Which of the two slider handles an interaction moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    /// The `min` handle
    Lower,
    /// The `max` handle
    Upper,
}

/// Inclusive selection on one flavor dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlavorRange {
    min: u8,
    max: u8,
}

impl Default for FlavorRange {
    fn default() -> Self {
        Self {
            min: FLAVOR_MIN,
            max: FLAVOR_MAX,
        }
    }
}

impl FlavorRange {
    /// Builds a range, clamping both bounds onto the scale and swapping them if reversed.
    #[must_use]
    pub fn new(min: u8, max: u8) -> Self {
        let a = min.clamp(FLAVOR_MIN, FLAVOR_MAX);
        let b = max.clamp(FLAVOR_MIN, FLAVOR_MAX);
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> u8 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> u8 {
        self.max
    }

    /// True when the range spans the whole scale.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.min == FLAVOR_MIN && self.max == FLAVOR_MAX
    }

    /// Inclusive containment.
    #[must_use]
    pub const fn contains(&self, value: u8) -> bool {
        self.min <= value && value <= self.max
    }

    /// Moves the lower handle. It cannot pass the upper handle or leave the scale.
    pub fn drag_lower(&mut self, value: u8) {
        self.min = value.clamp(FLAVOR_MIN, self.max);
    }

    /// Moves the upper handle. It cannot pass the lower handle or leave the scale.
    pub fn drag_upper(&mut self, value: u8) {
        self.max = value.clamp(self.min, FLAVOR_MAX);
    }

    /// Handles a tap on one of the discrete scale points.
    ///
    /// The point goes to whichever handle is nearer. An equidistant tap moves the
    /// lower handle, except on a collapsed range where the side of the tap decides.
    /// Returns the handle that moved, or `None` when the tap was
    /// ignored (off the scale, already on the handle, or it would invert the range).
    pub fn tap(&mut self, point: u8) -> Option<Handle> {
        if !(FLAVOR_MIN..=FLAVOR_MAX).contains(&point) {
            return None;
        }

        let to_lower = point.abs_diff(self.min);
        let to_upper = point.abs_diff(self.max);
        let handle = match to_lower.cmp(&to_upper) {
            Ordering::Less => Handle::Lower,
            Ordering::Greater => Handle::Upper,
            // Collapsed range: the side of the tap decides
            Ordering::Equal if self.min == self.max && point > self.max => Handle::Upper,
            Ordering::Equal => Handle::Lower,
        };

        match handle {
            Handle::Lower if point <= self.max && point != self.min => {
                self.min = point;
                Some(Handle::Lower)
            }
            Handle::Upper if point >= self.min && point != self.max => {
                self.max = point;
                Some(Handle::Upper)
            }
            _ => None,
        }
    }
}

/// The user's current selection on all four dimensions.
///
/// Lives only for the browsing session; a fresh screen starts from [`Default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlavorRangeFilters {
    /// Body range
    pub body: FlavorRange,
    /// Sweetness range
    pub sweetness: FlavorRange,
    /// Tannins range
    pub tannins: FlavorRange,
    /// Acidity range
    pub acidity: FlavorRange,
}

impl FlavorRangeFilters {
    /// The range selected for one dimension.
    #[must_use]
    pub const fn range(&self, dimension: FlavorDimension) -> &FlavorRange {
        match dimension {
            FlavorDimension::Body => &self.body,
            FlavorDimension::Sweetness => &self.sweetness,
            FlavorDimension::Tannins => &self.tannins,
            FlavorDimension::Acidity => &self.acidity,
        }
    }

    /// Mutable access for handle interactions.
    pub fn range_mut(&mut self, dimension: FlavorDimension) -> &mut FlavorRange {
        match dimension {
            FlavorDimension::Body => &mut self.body,
            FlavorDimension::Sweetness => &mut self.sweetness,
            FlavorDimension::Tannins => &mut self.tannins,
            FlavorDimension::Acidity => &mut self.acidity,
        }
    }

    /// True when no dimension has been narrowed.
    #[must_use]
    pub fn is_default(&self) -> bool {
        FlavorDimension::ALL
            .iter()
            .all(|d| self.range(*d).is_full())
    }

    /// Back to the full scale on every dimension.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether an item passes every dimension.
    ///
    /// With default filters everything matches, including wines without a profile
    /// and malformed profiles. Once any dimension is narrowed, a missing profile
    /// fails.
    #[must_use]
    pub fn matches(&self, profile: Option<&FlavorProfile>) -> bool {
        if self.is_default() {
            return true;
        }
        profile.is_some_and(|p| {
            FlavorDimension::ALL
                .iter()
                .all(|d| self.range(*d).contains(d.value_of(p)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn profile(body: u8, sweetness: u8, tannins: u8, acidity: u8) -> FlavorProfile {
        FlavorProfile {
            body,
            sweetness,
            tannins,
            acidity,
        }
    }

    fn narrowed(dimension: FlavorDimension, min: u8, max: u8) -> FlavorRangeFilters {
        let mut filters = FlavorRangeFilters::default();
        *filters.range_mut(dimension) = FlavorRange::new(min, max);
        filters
    }

    #[test]
    fn test_range_inclusivity_on_every_dimension() {
        for dimension in FlavorDimension::ALL {
            for lo in FLAVOR_MIN..=FLAVOR_MAX {
                for hi in lo..=FLAVOR_MAX {
                    let filters = narrowed(dimension, lo, hi);
                    for v in FLAVOR_MIN..=FLAVOR_MAX {
                        let mut p = profile(3, 3, 3, 3);
                        match dimension {
                            FlavorDimension::Body => p.body = v,
                            FlavorDimension::Sweetness => p.sweetness = v,
                            FlavorDimension::Tannins => p.tannins = v,
                            FlavorDimension::Acidity => p.acidity = v,
                        }
                        // untouched dimensions keep the full range
                        assert_eq!(
                            filters.matches(Some(&p)),
                            lo <= v && v <= hi,
                            "{dimension:?} [{lo},{hi}] value {v}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_all_dimensions_must_pass() {
        let mut filters = FlavorRangeFilters::default();
        filters.body = FlavorRange::new(4, 5);
        filters.acidity = FlavorRange::new(1, 2);

        assert!(filters.matches(Some(&profile(4, 1, 1, 2))));
        assert!(!filters.matches(Some(&profile(4, 1, 1, 3))));
        assert!(!filters.matches(Some(&profile(3, 1, 1, 2))));
    }

    #[test]
    fn test_default_filters_match_everything() {
        let filters = FlavorRangeFilters::default();
        assert!(filters.is_default());
        for b in FLAVOR_MIN..=FLAVOR_MAX {
            for s in FLAVOR_MIN..=FLAVOR_MAX {
                for t in FLAVOR_MIN..=FLAVOR_MAX {
                    for a in FLAVOR_MIN..=FLAVOR_MAX {
                        assert!(filters.matches(Some(&profile(b, s, t, a))));
                    }
                }
            }
        }
        assert!(filters.matches(None));
        // Malformed values are tolerated under default filters
        assert!(filters.matches(Some(&profile(0, 9, 3, 3))));
    }

    #[test]
    fn test_missing_profile_fails_narrowed_filters() {
        let filters = narrowed(FlavorDimension::Tannins, 1, 4);
        assert!(!filters.is_default());
        assert!(!filters.matches(None));
    }

    #[test]
    fn test_body_range_narrows_five_wines_to_three() {
        let filters = narrowed(FlavorDimension::Body, 2, 4);
        let bodies: Vec<u8> = (1..=5)
            .filter(|b| filters.matches(Some(&profile(*b, 3, 3, 3))))
            .collect();
        assert_eq!(bodies, vec![2, 3, 4]);
    }

    #[test]
    fn test_drag_clamps_against_other_handle() {
        let mut range = FlavorRange::new(2, 4);
        range.drag_lower(5);
        assert_eq!((range.min(), range.max()), (4, 4));

        range.drag_upper(1);
        assert_eq!((range.min(), range.max()), (4, 4));

        range.drag_upper(9);
        assert_eq!(range.max(), FLAVOR_MAX);

        range.drag_lower(0);
        assert_eq!(range.min(), FLAVOR_MIN);
    }

    #[test]
    fn test_tap_moves_nearest_handle() {
        let mut range = FlavorRange::default();
        assert_eq!(range.tap(2), Some(Handle::Lower));
        assert_eq!((range.min(), range.max()), (2, 5));

        assert_eq!(range.tap(4), Some(Handle::Upper));
        assert_eq!((range.min(), range.max()), (2, 4));

        // Midpoint goes to the lower handle
        assert_eq!(range.tap(3), Some(Handle::Lower));
        assert_eq!((range.min(), range.max()), (3, 4));
    }

    #[test]
    fn test_tap_noops() {
        let mut range = FlavorRange::new(3, 3);
        assert_eq!(range.tap(3), None);
        assert_eq!(range.tap(0), None);
        assert_eq!(range.tap(6), None);
        assert_eq!((range.min(), range.max()), (3, 3));

        // Collapsed range widens towards the tapped side
        assert_eq!(range.tap(5), Some(Handle::Upper));
        assert_eq!((range.min(), range.max()), (3, 5));
        assert_eq!(range.tap(1), Some(Handle::Lower));
        assert_eq!((range.min(), range.max()), (1, 5));
    }

    #[test]
    fn test_new_normalizes_reversed_and_out_of_scale_bounds() {
        let range = FlavorRange::new(7, 0);
        assert_eq!((range.min(), range.max()), (FLAVOR_MIN, FLAVOR_MAX));
        let range = FlavorRange::new(4, 2);
        assert_eq!((range.min(), range.max()), (2, 4));
    }

    #[test]
    fn test_handles_stay_ordered_from_any_constructed_range() {
        for min in 0..=6 {
            for max in 0..=6 {
                for value in 0..=6 {
                    let mut lower = FlavorRange::new(min, max);
                    lower.drag_lower(value);
                    assert!(FLAVOR_MIN <= lower.min() && lower.min() <= lower.max());
                    assert!(lower.max() <= FLAVOR_MAX);

                    let mut upper = FlavorRange::new(min, max);
                    upper.drag_upper(value);
                    assert!(FLAVOR_MIN <= upper.min() && upper.min() <= upper.max());
                    assert!(upper.max() <= FLAVOR_MAX);
                }
            }
        }

        let mut range = FlavorRange::new(3, 0);
        range.drag_lower(2);
        assert_eq!((range.min(), range.max()), (2, 3));
    }

    #[test]
    fn test_random_handle_sequences_preserve_ordering() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..500 {
            let mut filters = FlavorRangeFilters::default();
            for _ in 0..50 {
                let dimension = FlavorDimension::ALL[rng.gen_range(0..4)];
                let value: u8 = rng.gen_range(0..=6);
                let range = filters.range_mut(dimension);
                match rng.gen_range(0..3) {
                    0 => range.drag_lower(value),
                    1 => range.drag_upper(value),
                    _ => {
                        range.tap(value);
                    }
                }
                for d in FlavorDimension::ALL {
                    let r = filters.range(d);
                    assert!(FLAVOR_MIN <= r.min());
                    assert!(r.min() <= r.max());
                    assert!(r.max() <= FLAVOR_MAX);
                }
            }
        }
    }

    #[test]
    fn test_reset_restores_identity() {
        let mut filters = narrowed(FlavorDimension::Sweetness, 2, 2);
        filters.reset();
        assert!(filters.is_default());
    }
}

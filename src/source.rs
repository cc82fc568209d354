//! Power contribution sources.
//!
//! A power component (Int/Strength or power rating) can come from a ranged
//! stat, a legacy scalar field or a legacy `{min, max}` object. Each shape
//! is an explicit `StatSource` variant, picked from a precedence chain of
//! stat names and then reduced to a `(min, max)` pair for a rarity tier.

use crate::catalog::{Bounds, RangedStat, StatEntry};
use crate::numeric::StatValue;
use crate::rarity::RarityTier;
use crate::resolved::{max_biased, min_biased, ResolvedStats};
use crate::stat_id::{
    INTELLIGENCE, INT_STRENGTH, MAGICAL_POWER_RATING, PHYSICAL_POWER_RATING, POWER_RATING,
    STRENGTH,
};

/// Where a power component's value comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatSource<'a> {
    /// A per-tier ranged stat.
    Ranged(&'a RangedStat),
    /// A single number used for both ends.
    Scalar(StatValue),
    /// An explicit min/max object.
    Bounds(Bounds),
    /// Nothing contributes.
    Absent,
}

/// One power component: the ranged stats to try in order, then the
/// legacy field name accepted as scalar or `{min, max}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    pub ranged: &'static [&'static str],
    pub legacy: &'static str,
}

/// Strength, else Intelligence, else `intStrength`.
pub const INT_STRENGTH_COMPONENT: Component = Component {
    ranged: &[STRENGTH, INTELLIGENCE],
    legacy: INT_STRENGTH,
};

/// Magical, else Physical power rating, else `powerRating`.
pub const POWER_RATING_COMPONENT: Component = Component {
    ranged: &[MAGICAL_POWER_RATING, PHYSICAL_POWER_RATING],
    legacy: POWER_RATING,
};

impl<'a> StatSource<'a> {
    pub fn ranged(stat: &'a RangedStat) -> Self {
        StatSource::Ranged(stat)
    }

    pub fn scalar(value: StatValue) -> Self {
        StatSource::Scalar(value)
    }

    pub fn bounds(min: Option<StatValue>, max: Option<StatValue>) -> Self {
        StatSource::Bounds(Bounds { min, max })
    }

    /// Pick the first present source of a component.
    ///
    /// A present ranged stat wins even if it has no value for the tier
    /// later on; it then contributes 0.
    pub fn select(stats: &'a ResolvedStats, component: &Component) -> Self {
        if let Some(ranged) = component
            .ranged
            .iter()
            .find_map(|name| stats.ranged(name))
        {
            return StatSource::Ranged(ranged);
        }
        match stats.get(component.legacy) {
            Some(StatEntry::Scalar(value)) => StatSource::Scalar(*value),
            Some(StatEntry::Bounds(bounds)) => StatSource::Bounds(*bounds),
            _ => StatSource::Absent,
        }
    }

    /// `(min, max)` contribution at a tier; missing values count as 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use codex_stats::catalog::RangedStat;
    /// use codex_stats::source::StatSource;
    /// use codex_stats::RarityTier;
    ///
    /// let strength = RangedStat::new([
    ///     ("commonMin".to_string(), 10.0),
    ///     ("commonMax".to_string(), 20.0),
    /// ]);
    /// assert_eq!(StatSource::ranged(&strength).range(RarityTier::Common), (10.0, 20.0));
    /// assert_eq!(StatSource::scalar(7.0).range(RarityTier::Common), (7.0, 7.0));
    /// assert_eq!(StatSource::bounds(None, Some(3.0)).range(RarityTier::Epic), (0.0, 3.0));
    /// ```
    pub fn range(&self, tier: RarityTier) -> (StatValue, StatValue) {
        match self {
            StatSource::Ranged(ranged) => (
                min_biased(ranged, tier).unwrap_or(0.0),
                max_biased(ranged, tier).unwrap_or(0.0),
            ),
            StatSource::Scalar(value) => (*value, *value),
            StatSource::Bounds(bounds) => (bounds.min.unwrap_or(0.0), bounds.max.unwrap_or(0.0)),
            StatSource::Absent => (0.0, 0.0),
        }
    }
}

//! Resolved stat results module.
//!
//! Contains `ResolvedStats`, the stat set of one item at one enchant
//! level. Rarity is applied afterwards by picking the `{tier}Min` /
//! `{tier}Max` pair out of each ranged stat.

use crate::catalog::{RangedStat, StatEntry, StatMap};
use crate::display::format_stat_name;
use crate::numeric::StatValue;
use crate::rarity::RarityTier;
use crate::stat_id::{StatId, MAX_DURABILITY};
use serde::{Deserialize, Serialize};

/// The resolved stat set of an item.
///
/// Equality is deep value equality, which is what change gating at the
/// presentation boundary compares.
///
/// # Examples
///
/// ```rust
/// use codex_stats::catalog::{RangedStat, StatMap};
/// use codex_stats::{RarityTier, ResolvedStats, StatId};
///
/// let mut stats = StatMap::new();
/// stats.insert(
///     StatId::from_str("Strength"),
///     RangedStat::new([("rareMax".to_string(), 18.0)]).into(),
/// );
/// let resolved = ResolvedStats::new(stats);
///
/// // Only Max is present, so the Min-preferring lookup falls back to it.
/// assert_eq!(resolved.value_for("Strength", RarityTier::Rare), Some(18.0));
/// assert_eq!(resolved.value_for("Strength", RarityTier::Epic), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedStats {
    stats: StatMap,
}

/// Which visual group a stat belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatClass {
    Primary,
    Core,
}

/// One row of the rendered stat list.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayStat {
    pub stat_id: StatId,
    /// Spaced name, e.g. "Magical Power Rating".
    pub label: String,
    pub value: StatValue,
    pub class: StatClass,
}

impl ResolvedStats {
    /// Wrap a stat map as a resolved set.
    pub fn new(stats: StatMap) -> Self {
        Self { stats }
    }

    /// Get the entry for a stat, whatever its shape.
    pub fn get(&self, stat: &str) -> Option<&StatEntry> {
        self.stats.get(stat)
    }

    /// Get a stat only if it is a per-tier ranged stat.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use codex_stats::catalog::{RangedStat, StatEntry, StatMap};
    /// use codex_stats::{ResolvedStats, StatId};
    ///
    /// let mut stats = StatMap::new();
    /// stats.insert(StatId::from_str("intStrength"), StatEntry::Scalar(4.0));
    /// stats.insert(
    ///     StatId::from_str("Agility"),
    ///     RangedStat::new([("commonMin".to_string(), 2.0)]).into(),
    /// );
    /// let resolved = ResolvedStats::new(stats);
    ///
    /// assert!(resolved.ranged("Agility").is_some());
    /// assert!(resolved.ranged("intStrength").is_none());
    /// assert!(resolved.contains("intStrength"));
    /// ```
    pub fn ranged(&self, stat: &str) -> Option<&RangedStat> {
        self.get(stat).and_then(StatEntry::as_ranged)
    }

    pub fn contains(&self, stat: &str) -> bool {
        self.stats.contains_key(stat)
    }

    /// Iterate over stats in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&StatId, &StatEntry)> {
        self.stats.iter()
    }

    /// Number of stat entries, exempt ones included.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Borrow the underlying stat map.
    pub fn as_map(&self) -> &StatMap {
        &self.stats
    }

    pub fn into_map(self) -> StatMap {
        self.stats
    }

    /// Rarity-value selection: `{tier}Min`, else `{tier}Max`, else `None`.
    pub fn value_for(&self, stat: &str, tier: RarityTier) -> Option<StatValue> {
        self.ranged(stat).and_then(|ranged| min_biased(ranged, tier))
    }

    /// Max-biased counterpart: `{tier}Max`, else `{tier}Min`.
    pub fn max_value_for(&self, stat: &str, tier: RarityTier) -> Option<StatValue> {
        self.ranged(stat).and_then(|ranged| max_biased(ranged, tier))
    }

    /// Durability for the tier, looked up with the rarity-value rule.
    pub fn max_durability(&self, tier: RarityTier) -> Option<StatValue> {
        self.value_for(MAX_DURABILITY, tier)
    }

    /// Stat rows for rendering at a tier.
    ///
    /// Skips durability and the archetype marker (shown elsewhere) and
    /// any stat without a value for the tier. Core stats come after all
    /// other stats; within a group rows keep stat-name order.
    pub fn display_order(&self, tier: RarityTier) -> Vec<DisplayStat> {
        let mut rows: Vec<DisplayStat> = self
            .stats
            .iter()
            .filter(|(stat_id, _)| !stat_id.is_scaling_exempt())
            .filter_map(|(stat_id, entry)| {
                let ranged = entry.as_ranged()?;
                let value = min_biased(ranged, tier)?;
                let class = if ranged.is_core() {
                    StatClass::Core
                } else {
                    StatClass::Primary
                };
                Some(DisplayStat {
                    stat_id: stat_id.clone(),
                    label: format_stat_name(stat_id.as_str()),
                    value,
                    class,
                })
            })
            .collect();

        // sort_by_key is stable
        rows.sort_by_key(|row| row.class);
        rows
    }
}

impl From<StatMap> for ResolvedStats {
    fn from(stats: StatMap) -> Self {
        Self::new(stats)
    }
}

pub(crate) fn min_biased(ranged: &RangedStat, tier: RarityTier) -> Option<StatValue> {
    ranged
        .value(&tier.min_key())
        .or_else(|| ranged.value(&tier.max_key()))
}

pub(crate) fn max_biased(ranged: &RangedStat, tier: RarityTier) -> Option<StatValue> {
    ranged
        .value(&tier.max_key())
        .or_else(|| ranged.value(&tier.min_key()))
}

//! Enchantment scaling transform.
//!
//! An enchant level multiplies every Min/Max value of every ranged stat
//! by `1 + PrimaryStatIncrease` and rounds the result to an integer.
//! Durability and the archetype marker are never scaled.

use crate::catalog::{LevelData, RangeValue, RangedStat, StatEntry, StatMap};
use crate::numeric::{round_half_up, StatValue};
use crate::stat_id::StatId;

/// Multiplicative scaling for one enchant level.
///
/// # Examples
///
/// ```rust
/// use codex_stats::catalog::{LevelData, RangedStat};
/// use codex_stats::transform::EnchantTransform;
///
/// let transform = EnchantTransform::from_level(&LevelData::new(0.1));
/// let base = RangedStat::new([("commonMin".to_string(), 100.0)]);
///
/// let scaled = transform.apply_ranged(&base);
/// assert_eq!(scaled.value("commonMin"), Some(110.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnchantTransform {
    multiplier: StatValue,
}

impl EnchantTransform {
    /// Create a transform from a fractional increase (`0.1` = +10%).
    pub fn new(increase: StatValue) -> Self {
        Self {
            multiplier: 1.0 + increase,
        }
    }

    pub fn from_level(level: &LevelData) -> Self {
        Self::new(level.increase())
    }

    pub fn multiplier(&self) -> StatValue {
        self.multiplier
    }

    /// Scale one Min/Max value.
    pub fn apply_value(&self, value: StatValue) -> StatValue {
        round_half_up(value * self.multiplier)
    }

    /// Scale every numeric `*Min` / `*Max` value; other keys, non-numeric
    /// values and the archetype pass through.
    pub fn apply_ranged(&self, stat: &RangedStat) -> RangedStat {
        let values = stat
            .values
            .iter()
            .map(|(key, value)| {
                let scaled = match value {
                    RangeValue::Number(number) if is_range_key(key) => {
                        RangeValue::Number(self.apply_value(*number))
                    }
                    _ => value.clone(),
                };
                (key.clone(), scaled)
            })
            .collect();

        RangedStat {
            values,
            archetype: stat.archetype.clone(),
        }
    }

    /// Scale a whole stat map.
    ///
    /// Exempt stats are copied as-is, ranged stats are scaled and every
    /// other entry is dropped.
    pub fn apply_stats(&self, stats: &StatMap) -> StatMap {
        stats
            .iter()
            .filter_map(|(stat_id, entry)| {
                self.apply_entry(stat_id, entry)
                    .map(|scaled| (stat_id.clone(), scaled))
            })
            .collect()
    }

    fn apply_entry(&self, stat_id: &StatId, entry: &StatEntry) -> Option<StatEntry> {
        if stat_id.is_scaling_exempt() {
            return Some(entry.clone());
        }
        match entry {
            StatEntry::Ranged(ranged) => Some(StatEntry::Ranged(self.apply_ranged(ranged))),
            StatEntry::Scalar(_) | StatEntry::Bounds(_) | StatEntry::Tag(_) | StatEntry::Other(_) => {
                None
            }
        }
    }

    pub fn description(&self) -> String {
        format!("×{:.2}", self.multiplier)
    }
}

fn is_range_key(key: &str) -> bool {
    key.ends_with("Min") || key.ends_with("Max")
}

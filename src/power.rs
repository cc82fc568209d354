//! Power estimation.
//!
//! Power is derived from two components, Int/Strength and power rating:
//!
//! ```text
//! power = (int_strength * strength_weight + power_rating) / divisor
//! ```
//!
//! with `strength_weight = 3` and `divisor = 50` by default, rounded to two
//! decimals. The item-derived path yields a min/max pair for the selected
//! rarity tier; the manual path computes a single what-if number from two
//! user-entered integers and never depends on the item selection.

use crate::error::StatError;
use crate::numeric::{round_to_places, StatValue};
use crate::rarity::RarityTier;
use crate::resolved::ResolvedStats;
use crate::source::{StatSource, INT_STRENGTH_COMPONENT, POWER_RATING_COMPONENT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tunable constants of the power formula.
///
/// # Examples
///
/// ```rust
/// use codex_stats::PowerFormula;
///
/// let formula = PowerFormula::from_json_str(r#"{ "divisor": 100 }"#).unwrap();
/// assert_eq!(formula.strength_weight, 3.0);
/// assert_eq!(formula.divisor, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerFormula {
    /// Weight of one point of Int/Strength relative to power rating.
    #[serde(default = "default_strength_weight")]
    pub strength_weight: StatValue,
    #[serde(default = "default_divisor")]
    pub divisor: StatValue,
    /// Decimal places kept in the result.
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

impl Default for PowerFormula {
    fn default() -> Self {
        PowerFormula {
            strength_weight: 3.0,
            divisor: 50.0,
            decimals: 2,
        }
    }
}

fn default_strength_weight() -> StatValue {
    3.0
}
fn default_divisor() -> StatValue {
    50.0
}
fn default_decimals() -> u32 {
    2
}

impl PowerFormula {
    /// Parse a formula config; missing fields take their defaults.
    pub fn from_json_str(content: &str) -> Result<Self, StatError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn power(&self, int_strength: StatValue, power_rating: StatValue) -> Power {
        let raw = (int_strength * self.strength_weight + power_rating) / self.divisor;
        Power(round_to_places(raw, self.decimals))
    }
}

/// A power number, already rounded. Displays with two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Power(StatValue);

impl Power {
    pub fn value(self) -> StatValue {
        self.0
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Item-derived power range. Both ends are `None` when no item is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerRange {
    pub min: Option<Power>,
    pub max: Option<Power>,
}

impl PowerRange {
    /// The "no item selected" range.
    pub const CLEARED: PowerRange = PowerRange {
        min: None,
        max: None,
    };

    pub fn is_cleared(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Computes item-derived and manual power.
///
/// # Examples
///
/// ```rust
/// use codex_stats::PowerEstimator;
///
/// let estimator = PowerEstimator::default();
/// assert_eq!(estimator.manual_estimate(10, 20).value(), 1.0);
/// assert_eq!(estimator.manual_estimate(10, 20).to_string(), "1.00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PowerEstimator {
    formula: PowerFormula,
}

impl PowerEstimator {
    pub fn new(formula: PowerFormula) -> Self {
        Self { formula }
    }

    pub fn formula(&self) -> &PowerFormula {
        &self.formula
    }

    /// Power range of a resolved stat set at a rarity tier.
    ///
    /// `None` stats means no item is selected and yields
    /// [`PowerRange::CLEARED`], which is distinct from a zero-power item.
    pub fn estimate(&self, stats: Option<&ResolvedStats>, tier: RarityTier) -> PowerRange {
        let Some(stats) = stats else {
            return PowerRange::CLEARED;
        };

        let (min_int_str, max_int_str) =
            StatSource::select(stats, &INT_STRENGTH_COMPONENT).range(tier);
        let (min_rating, max_rating) =
            StatSource::select(stats, &POWER_RATING_COMPONENT).range(tier);

        let range = PowerRange {
            min: Some(self.formula.power(min_int_str, min_rating)),
            max: Some(self.formula.power(max_int_str, max_rating)),
        };
        tracing::debug!(%tier, ?range, "estimated item power");
        range
    }

    /// What-if power from manually entered values.
    pub fn manual_estimate(&self, int_strength: i64, power_rating: i64) -> Power {
        self.formula
            .power(int_strength as StatValue, power_rating as StatValue)
    }
}

/// Parse a manual input field into an integer.
///
/// Takes the leading integer of the trimmed text (optional sign, then
/// digits) and ignores the rest. Text with no leading integer, or one
/// that does not fit, is 0.
///
/// # Examples
///
/// ```rust
/// use codex_stats::power::parse_manual_input;
///
/// assert_eq!(parse_manual_input("42"), 42);
/// assert_eq!(parse_manual_input(" -7 "), -7);
/// assert_eq!(parse_manual_input("12.9"), 12);
/// assert_eq!(parse_manual_input("abc"), 0);
/// assert_eq!(parse_manual_input(""), 0);
/// ```
pub fn parse_manual_input(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return 0;
    }
    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    trimmed[..sign_len + digits_len].parse().unwrap_or(0)
}

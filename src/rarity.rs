//! Rarity tiers.
//!
//! Every ranged stat stores one `{tier}Min` / `{tier}Max` pair per tier,
//! so the tier is the selector that turns a ranged stat into a scalar.

use crate::error::StatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven ordered rarity tiers.
///
/// # Examples
///
/// ```rust
/// use codex_stats::RarityTier;
///
/// let tier: RarityTier = "Epic".parse().unwrap();
/// assert_eq!(tier, RarityTier::Epic);
/// assert_eq!(tier.min_key(), "epicMin");
/// assert_eq!(tier.max_key(), "epicMax");
/// assert!(RarityTier::Common < RarityTier::Artifact);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RarityTier {
    #[default]
    Common,
    Uncommon,
    Rare,
    Heroic,
    Epic,
    Legendary,
    Artifact,
}

impl RarityTier {
    /// All tiers, lowest first.
    pub fn all() -> &'static [RarityTier] {
        &[
            RarityTier::Common,
            RarityTier::Uncommon,
            RarityTier::Rare,
            RarityTier::Heroic,
            RarityTier::Epic,
            RarityTier::Legendary,
            RarityTier::Artifact,
        ]
    }

    /// Lowercase name, as used in catalog keys.
    pub fn as_str(self) -> &'static str {
        match self {
            RarityTier::Common => "common",
            RarityTier::Uncommon => "uncommon",
            RarityTier::Rare => "rare",
            RarityTier::Heroic => "heroic",
            RarityTier::Epic => "epic",
            RarityTier::Legendary => "legendary",
            RarityTier::Artifact => "artifact",
        }
    }

    /// Key of the tier's Min value in a ranged stat (`"rareMin"`).
    pub fn min_key(self) -> String {
        format!("{}Min", self.as_str())
    }

    /// Key of the tier's Max value in a ranged stat (`"rareMax"`).
    pub fn max_key(self) -> String {
        format!("{}Max", self.as_str())
    }

    /// Capitalized label for headings ("Legendary").
    pub fn label(self) -> &'static str {
        match self {
            RarityTier::Common => "Common",
            RarityTier::Uncommon => "Uncommon",
            RarityTier::Rare => "Rare",
            RarityTier::Heroic => "Heroic",
            RarityTier::Epic => "Epic",
            RarityTier::Legendary => "Legendary",
            RarityTier::Artifact => "Artifact",
        }
    }
}

impl FromStr for RarityTier {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        RarityTier::all()
            .iter()
            .copied()
            .find(|tier| tier.as_str() == lowered)
            .ok_or_else(|| StatError::UnknownRarity(s.to_string()))
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tiers_ordered() {
        let tiers = RarityTier::all();
        assert_eq!(tiers.len(), 7);
        assert!(tiers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("LEGENDARY".parse::<RarityTier>().unwrap(), RarityTier::Legendary);
        assert_eq!(" heroic ".parse::<RarityTier>().unwrap(), RarityTier::Heroic);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "mythic".parse::<RarityTier>().unwrap_err();
        assert!(err.to_string().contains("mythic"));
    }

    #[test]
    fn test_default_is_common() {
        assert_eq!(RarityTier::default(), RarityTier::Common);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&RarityTier::Artifact).unwrap();
        assert_eq!(json, "\"artifact\"");
    }
}

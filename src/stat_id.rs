//! Stat identifier module.
//!
//! Provides the `StatId` type, an interned stat name as it appears in the
//! item catalog (`"Strength"`, `"MaxDurability"`, ...). Uses `Arc<str>` so
//! resolved stat sets can be cloned and compared cheaply.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::sync::Arc;

/// Durability stat. Never scaled by enchantment.
pub const MAX_DURABILITY: &str = "MaxDurability";
/// Stats-level archetype marker. Never scaled by enchantment.
pub const ARCHETYPE: &str = "archetype";
/// Primary attribute contributing to power (physical items).
pub const STRENGTH: &str = "Strength";
/// Primary attribute contributing to power (magical items).
pub const INTELLIGENCE: &str = "Intelligence";
pub const MAGICAL_POWER_RATING: &str = "MagicalPowerRating";
pub const PHYSICAL_POWER_RATING: &str = "PhysicalPowerRating";
/// Legacy scalar or `{min,max}` Int/Strength field.
pub const INT_STRENGTH: &str = "intStrength";
/// Legacy scalar or `{min,max}` power rating field.
pub const POWER_RATING: &str = "powerRating";

/// Interned string identifier for stats.
///
/// # Examples
///
/// ```rust
/// use codex_stats::StatId;
///
/// let strength = StatId::from_str("Strength");
/// let strength2: StatId = "Strength".into();
/// let strength3: StatId = String::from("Strength").into();
///
/// assert_eq!(strength, strength2);
/// assert_eq!(strength, strength3);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct StatId(Arc<str>);

impl Serialize for StatId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StatId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(StatId::from(s))
    }
}

impl StatId {
    /// Create a new `StatId` from a string slice.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the string representation of this `StatId`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether enchantment scaling must leave this stat untouched.
    ///
    /// ```rust
    /// use codex_stats::StatId;
    ///
    /// assert!(StatId::from_str("MaxDurability").is_scaling_exempt());
    /// assert!(StatId::from_str("archetype").is_scaling_exempt());
    /// assert!(!StatId::from_str("Strength").is_scaling_exempt());
    /// ```
    pub fn is_scaling_exempt(&self) -> bool {
        matches!(self.as_str(), MAX_DURABILITY | ARCHETYPE)
    }
}

impl Borrow<str> for StatId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StatId {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for StatId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl std::fmt::Display for StatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_stat_id_creation() {
        let id1 = StatId::from_str("Strength");
        let id2 = StatId::from_str("Strength");
        assert_eq!(id1, id2);
        assert_eq!(id1.as_str(), "Strength");
    }

    #[test]
    fn test_stat_id_ordering() {
        let agility = StatId::from_str("Agility");
        let strength = StatId::from_str("Strength");
        assert!(agility < strength);
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(StatId::from_str(STRENGTH), 10.0);
        assert_eq!(map.get(STRENGTH), Some(&10.0));
    }

    #[test]
    fn test_serde_as_plain_string() {
        let id = StatId::from_str(MAX_DURABILITY);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"MaxDurability\"");
        let back: StatId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

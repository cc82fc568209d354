//! Selection state for stat resolution.
//!
//! A `Selection` carries the three user-controlled selectors: which item,
//! which rarity tier and which enchant level. It is owned by the caller
//! and passed by reference into resolution; the core never stores it.

use crate::error::StatError;
use crate::rarity::RarityTier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enchant level selector, `0..=20`. Level 0 means unenchanted.
///
/// # Examples
///
/// ```rust
/// use codex_stats::EnchantLevel;
///
/// let level = EnchantLevel::new(5).unwrap();
/// assert_eq!(level.get(), 5);
/// assert!(EnchantLevel::NONE.is_none());
/// assert!(EnchantLevel::new(21).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct EnchantLevel(u8);

impl EnchantLevel {
    /// Highest selectable enchant level.
    pub const MAX: u8 = 20;
    /// Unenchanted.
    pub const NONE: EnchantLevel = EnchantLevel(0);

    /// Validate a level number.
    pub fn new(level: u8) -> Result<Self, StatError> {
        if level > Self::MAX {
            return Err(StatError::InvalidEnchantLevel(level));
        }
        Ok(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether this is level 0 (unenchanted).
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Every selectable level, `0` first.
    pub fn all() -> impl Iterator<Item = EnchantLevel> {
        (0..=Self::MAX).map(EnchantLevel)
    }
}

impl TryFrom<u8> for EnchantLevel {
    type Error = StatError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<EnchantLevel> for u8 {
    fn from(level: EnchantLevel) -> Self {
        level.0
    }
}

impl fmt::Display for EnchantLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("None")
        } else {
            write!(f, "+{}", self.0)
        }
    }
}

/// Parses the forms `Display` writes (`"None"`, `"+4"`) and bare numbers.
///
/// # Examples
///
/// ```rust
/// use codex_stats::{EnchantLevel, StatError};
///
/// assert_eq!("+4".parse::<EnchantLevel>().unwrap().get(), 4);
/// assert_eq!("None".parse::<EnchantLevel>().unwrap(), EnchantLevel::NONE);
/// assert!(matches!(
///     "max".parse::<EnchantLevel>(),
///     Err(StatError::InvalidEnchantInput(text)) if text == "max"
/// ));
/// ```
impl FromStr for EnchantLevel {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("none") {
            return Ok(Self::NONE);
        }
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let level: u8 = digits
            .parse()
            .map_err(|_| StatError::InvalidEnchantInput(s.to_string()))?;
        Self::new(level)
    }
}

/// The user's current selectors.
///
/// # Examples
///
/// ```rust
/// use codex_stats::{EnchantLevel, RarityTier, Selection};
///
/// let selection = Selection::new()
///     .with_item("sword-1")
///     .with_rarity(RarityTier::Epic)
///     .with_enchant_level(EnchantLevel::new(3).unwrap());
///
/// assert_eq!(selection.item_id.as_deref(), Some("sword-1"));
/// assert_eq!(selection.rarity, RarityTier::Epic);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// `None` means no item is selected.
    pub item_id: Option<String>,
    pub rarity: RarityTier,
    pub enchant_level: EnchantLevel,
}

impl Selection {
    /// Nothing selected, Common tier, unenchanted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an item by catalog id.
    pub fn with_item(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    pub fn with_rarity(mut self, rarity: RarityTier) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_enchant_level(mut self, enchant_level: EnchantLevel) -> Self {
        self.enchant_level = enchant_level;
        self
    }
}

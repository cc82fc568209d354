//! Error types.
//!
//! `StatError` covers the few hard failures (loading a catalog, rejecting
//! out-of-domain selector input). Resolution itself never fails: every
//! degraded path produces a `Diagnostic` next to a safe fallback value.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading catalog data or validating selector input.
///
/// # Examples
///
/// ```rust
/// use codex_stats::StatError;
///
/// let err = StatError::InvalidEnchantLevel(25);
/// assert_eq!(err.to_string(), "Enchant level 25 is outside 0..=20");
/// ```
#[derive(Debug, Error)]
pub enum StatError {
    /// A catalog file could not be read.
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog or config JSON did not match the expected shape.
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Enchant level selector outside the supported range.
    #[error("Enchant level {0} is outside 0..=20")]
    InvalidEnchantLevel(u8),

    /// Enchant level text that is not a level number.
    #[error("Invalid enchant level: {0:?}")]
    InvalidEnchantInput(String),

    /// Rarity name that is not one of the seven tiers.
    #[error("Unknown rarity tier: {0}")]
    UnknownRarity(String),
}

/// Non-fatal outcome of a resolution step that fell back to a default.
///
/// The resolver logs each diagnostic at `warn` level and also hands it
/// back to the caller, which may surface or ignore it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The item references an enchantment table the catalog does not have.
    #[error("Enchantment data not found for GUID: {enchant_id}")]
    MissingEnchantment { enchant_id: String },

    /// Requested level is above the number of levels the table defines.
    #[error("Enchant level {level} is out of bounds for item {item} ({defined} levels defined)")]
    LevelOutOfRange {
        item: String,
        level: u8,
        defined: usize,
    },

    /// The level slot exists but carries no level data.
    #[error("Enchantment level data not found for level: {level} and GUID: {level_id}")]
    MissingLevelData { level: u8, level_id: String },

    /// Selected item id is not in the catalog.
    #[error("Item not found for GUID: {item_id}")]
    UnknownItem { item_id: String },

    /// Item references a set-bonus table the catalog does not have.
    #[error("Set bonus data not found for GUID: {set_id}")]
    MissingSetBonus { set_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatError::UnknownRarity("mythic".to_string());
        assert!(err.to_string().contains("mythic"));
    }

    #[test]
    fn test_enchant_input_error_shows_text() {
        let err = StatError::InvalidEnchantInput("max".to_string());
        assert_eq!(err.to_string(), "Invalid enchant level: \"max\"");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = StatError::Io {
            path: PathBuf::from("data/items.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let display = err.to_string();
        assert!(display.contains("data/items.json"));
        assert!(display.contains("missing"));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::LevelOutOfRange {
            item: "Arming Sword".to_string(),
            level: 7,
            defined: 5,
        };
        let display = diag.to_string();
        assert!(display.contains("Enchant level 7"));
        assert!(display.contains("Arming Sword"));
        assert!(display.contains("5 levels"));
    }
}

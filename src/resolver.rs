//! Stat resolver module.
//!
//! Provides the `StatResolver` type, the entry point that turns an item
//! record and an enchant level into a `ResolvedStats` set. Resolution is a
//! pure function of its inputs; every lookup failure degrades to the
//! unscaled base stats and is reported as a `Diagnostic`.

use crate::catalog::{Catalog, ItemRecord};
use crate::context::{EnchantLevel, Selection};
use crate::error::Diagnostic;
use crate::resolved::ResolvedStats;
use crate::transform::EnchantTransform;

/// Outcome of resolving one item.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub stats: ResolvedStats,
    /// Set when resolution fell back to the unscaled base stats.
    pub diagnostic: Option<Diagnostic>,
}

impl Resolution {
    fn scaled(stats: ResolvedStats) -> Self {
        Self {
            stats,
            diagnostic: None,
        }
    }

    fn fallback(item: &ItemRecord, diagnostic: Diagnostic) -> Self {
        tracing::warn!("{}", diagnostic);
        Self {
            stats: ResolvedStats::new(item.stats.clone()),
            diagnostic: Some(diagnostic),
        }
    }
}

/// Why a selection resolved to no stats at all.
///
/// Either way the presentation clears; an unknown id additionally
/// carries the diagnostic explaining why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cleared {
    /// No item is selected.
    NoSelection,
    /// The selected id is not in the catalog.
    Unknown(Diagnostic),
}

impl Cleared {
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Cleared::NoSelection => None,
            Cleared::Unknown(diagnostic) => Some(diagnostic),
        }
    }
}

/// Resolves item stats against a read-only catalog.
///
/// The resolver holds nothing but the catalog borrow, so it is `Copy`
/// and every call is independent of previous calls.
///
/// # Examples
///
/// ```rust
/// use codex_stats::{Catalog, EnchantLevel, RarityTier, StatResolver};
///
/// let items = r#"{ "sword-1": {
///     "name": "Arming Sword",
///     "enchantGuid": "weapon-enchants",
///     "stats": { "Strength": { "values": { "commonMin": 100, "commonMax": 120 } } }
/// } }"#;
/// let enchants = r#"{ "weapon-enchants": { "levels": {
///     "l1": { "PrimaryStatIncrease": 0.05 },
///     "l2": { "PrimaryStatIncrease": 0.1 }
/// } } }"#;
/// let catalog = Catalog::from_json_strs(items, enchants, None).unwrap();
/// let resolver = StatResolver::new(&catalog);
///
/// let item = catalog.item("sword-1").unwrap();
/// let resolution = resolver.resolve(item, EnchantLevel::new(2).unwrap());
///
/// assert!(resolution.diagnostic.is_none());
/// assert_eq!(resolution.stats.value_for("Strength", RarityTier::Common), Some(110.0));
/// assert_eq!(resolution.stats.max_value_for("Strength", RarityTier::Common), Some(132.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StatResolver<'c> {
    catalog: &'c Catalog,
}

impl<'c> StatResolver<'c> {
    /// Create a resolver over a catalog.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Resolve an item's stats at an enchant level.
    ///
    /// Returns the base stats unchanged when the item has no enchantment
    /// reference or the level is 0. Returns them unchanged with a
    /// diagnostic when the enchantment table, the level slot or the level
    /// data is missing.
    pub fn resolve(&self, item: &ItemRecord, level: EnchantLevel) -> Resolution {
        let enchant_id = match item.enchant_guid.as_deref() {
            Some(id) if !level.is_none() => id,
            _ => return Resolution::scaled(ResolvedStats::new(item.stats.clone())),
        };

        let Some(table) = self.catalog.enchantment(enchant_id) else {
            return Resolution::fallback(
                item,
                Diagnostic::MissingEnchantment {
                    enchant_id: enchant_id.to_string(),
                },
            );
        };

        let Some((level_id, level_data)) = table.levels.slot(level.get()) else {
            return Resolution::fallback(
                item,
                Diagnostic::LevelOutOfRange {
                    item: item.display_name().to_string(),
                    level: level.get(),
                    defined: table.levels.len(),
                },
            );
        };

        let Some(level_data) = level_data else {
            return Resolution::fallback(
                item,
                Diagnostic::MissingLevelData {
                    level: level.get(),
                    level_id: level_id.to_string(),
                },
            );
        };

        let transform = EnchantTransform::from_level(level_data);
        tracing::debug!(
            item = item.display_name(),
            level = level.get(),
            "applying enchant {}",
            transform.description()
        );
        Resolution::scaled(ResolvedStats::new(transform.apply_stats(&item.stats)))
    }

    /// Resolve the selected item.
    ///
    /// `Err` is the cleared signal: no item is selected, or the selected
    /// id is not in the catalog. It is distinct from an item with no stats.
    pub fn resolve_selection(&self, selection: &Selection) -> Result<Resolution, Cleared> {
        let item_id = selection
            .item_id
            .as_deref()
            .ok_or(Cleared::NoSelection)?;
        match self.catalog.item(item_id) {
            Some(item) => Ok(self.resolve(item, selection.enchant_level)),
            None => {
                let diagnostic = Diagnostic::UnknownItem {
                    item_id: item_id.to_string(),
                };
                tracing::warn!("{}", diagnostic);
                Err(Cleared::Unknown(diagnostic))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EnchantLevels, EnchantmentTable, LevelData, RangedStat, StatEntry};
    use crate::rarity::RarityTier;
    use crate::stat_id::{StatId, ARCHETYPE, MAX_DURABILITY};
    use std::collections::BTreeMap;

    fn level(n: u8) -> EnchantLevel {
        EnchantLevel::new(n).unwrap()
    }

    fn item(enchant: Option<&str>) -> ItemRecord {
        let mut item = ItemRecord {
            name: Some("Test Blade".to_string()),
            enchant_guid: enchant.map(str::to_string),
            ..ItemRecord::default()
        };
        item.stats.insert(
            StatId::from_str("Strength"),
            RangedStat::new([
                ("commonMin".to_string(), 100.0),
                ("commonMax".to_string(), 200.0),
            ])
            .into(),
        );
        item.stats.insert(
            StatId::from_str(MAX_DURABILITY),
            RangedStat::new([("commonMin".to_string(), 75.0)]).into(),
        );
        item.stats.insert(
            StatId::from_str(ARCHETYPE),
            StatEntry::Tag("Primary".to_string()),
        );
        item
    }

    fn catalog() -> Catalog {
        let levels: EnchantLevels = vec![
            ("lvl-a", Some(LevelData::new(0.05))),
            ("lvl-b", Some(LevelData::new(0.1))),
            ("lvl-c", None),
        ]
        .into_iter()
        .collect();
        let mut enchantments = BTreeMap::new();
        enchantments.insert("ench".to_string(), EnchantmentTable::new(levels));

        let mut items = BTreeMap::new();
        items.insert("blade".to_string(), item(Some("ench")));
        Catalog::new(items, enchantments, BTreeMap::new())
    }

    #[test]
    fn test_level_zero_is_identity() {
        let catalog = catalog();
        let resolver = StatResolver::new(&catalog);
        let item = item(Some("ench"));

        let resolution = resolver.resolve(&item, EnchantLevel::NONE);

        assert_eq!(resolution.stats.as_map(), &item.stats);
        assert!(resolution.diagnostic.is_none());
    }

    #[test]
    fn test_no_enchant_reference_is_identity() {
        let catalog = catalog();
        let resolver = StatResolver::new(&catalog);
        let item = item(None);

        let resolution = resolver.resolve(&item, level(5));

        assert_eq!(resolution.stats.as_map(), &item.stats);
        assert!(resolution.diagnostic.is_none());
    }

    #[test]
    fn test_scaling_applied() {
        let catalog = catalog();
        let resolver = StatResolver::new(&catalog);

        let resolution = resolver.resolve(&item(Some("ench")), level(2));

        assert_eq!(
            resolution.stats.value_for("Strength", RarityTier::Common),
            Some(110.0)
        );
        assert_eq!(
            resolution.stats.max_value_for("Strength", RarityTier::Common),
            Some(220.0)
        );
        assert_eq!(resolution.stats.max_durability(RarityTier::Common), Some(75.0));
        assert!(resolution.stats.contains(ARCHETYPE));
    }

    #[test]
    fn test_missing_enchantment_falls_back() {
        let catalog = catalog();
        let resolver = StatResolver::new(&catalog);
        let item = item(Some("nope"));

        let resolution = resolver.resolve(&item, level(1));

        assert_eq!(resolution.stats.as_map(), &item.stats);
        assert_eq!(
            resolution.diagnostic,
            Some(Diagnostic::MissingEnchantment {
                enchant_id: "nope".to_string()
            })
        );
    }

    #[test]
    fn test_level_out_of_range_falls_back() {
        let catalog = catalog();
        let resolver = StatResolver::new(&catalog);
        let item = item(Some("ench"));

        let resolution = resolver.resolve(&item, level(4));

        assert_eq!(resolution.stats, resolver.resolve(&item, EnchantLevel::NONE).stats);
        assert_eq!(
            resolution.diagnostic,
            Some(Diagnostic::LevelOutOfRange {
                item: "Test Blade".to_string(),
                level: 4,
                defined: 3,
            })
        );
    }

    #[test]
    fn test_missing_level_data_falls_back() {
        let catalog = catalog();
        let resolver = StatResolver::new(&catalog);
        let item = item(Some("ench"));

        let resolution = resolver.resolve(&item, level(3));

        assert_eq!(resolution.stats.as_map(), &item.stats);
        assert!(matches!(
            resolution.diagnostic,
            Some(Diagnostic::MissingLevelData { level: 3, .. })
        ));
    }

    #[test]
    fn test_resolve_selection_cleared() {
        let catalog = catalog();
        let resolver = StatResolver::new(&catalog);

        assert_eq!(
            resolver.resolve_selection(&Selection::new()),
            Err(Cleared::NoSelection)
        );

        let unknown = resolver
            .resolve_selection(&Selection::new().with_item("ghost"))
            .unwrap_err();
        assert_eq!(
            unknown.diagnostic(),
            Some(&Diagnostic::UnknownItem {
                item_id: "ghost".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_selection_item() {
        let catalog = catalog();
        let resolver = StatResolver::new(&catalog);
        let selection = Selection::new()
            .with_item("blade")
            .with_enchant_level(level(1));

        let resolution = resolver.resolve_selection(&selection).unwrap();

        assert_eq!(
            resolution.stats.value_for("Strength", RarityTier::Common),
            Some(105.0)
        );
    }

    #[test]
    fn test_resolution_is_pure() {
        let catalog = catalog();
        let resolver = StatResolver::new(&catalog);
        let item = item(Some("ench"));

        let first = resolver.resolve(&item, level(2));
        let second = resolver.resolve(&item, level(2));

        assert_eq!(first, second);
    }
}

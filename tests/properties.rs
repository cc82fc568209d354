//! Property tests for stat resolution and power estimation.

use codex_stats::catalog::{EnchantLevels, EnchantmentTable, LevelData, RangedStat, StatMap};
use codex_stats::numeric::round_half_up;
use codex_stats::stat_id::{ARCHETYPE, MAX_DURABILITY};
use codex_stats::*;
use proptest::prelude::*;
use std::collections::BTreeMap;

const ENCHANT_ID: &str = "enchant-1";

fn item_with(strength: (f64, f64), durability: f64) -> ItemRecord {
    let mut stats = StatMap::new();
    stats.insert(
        StatId::from_str("Strength"),
        RangedStat::new([
            ("commonMin".to_string(), strength.0),
            ("commonMax".to_string(), strength.1),
        ])
        .into(),
    );
    stats.insert(
        StatId::from_str(MAX_DURABILITY),
        RangedStat::new([("commonMin".to_string(), durability)]).into(),
    );
    stats.insert(
        StatId::from_str(ARCHETYPE),
        StatEntry::Tag("Primary".to_string()),
    );
    ItemRecord {
        name: Some("Test Item".to_string()),
        enchant_guid: Some(ENCHANT_ID.to_string()),
        stats,
        ..ItemRecord::default()
    }
}

fn catalog_with(item: &ItemRecord, increases: &[f64]) -> Catalog {
    let levels: EnchantLevels = increases
        .iter()
        .enumerate()
        .map(|(i, &inc)| (format!("level-{i}"), Some(LevelData::new(inc))))
        .collect();

    let mut items = BTreeMap::new();
    items.insert("item".to_string(), item.clone());
    let mut enchantments = BTreeMap::new();
    enchantments.insert(ENCHANT_ID.to_string(), EnchantmentTable::new(levels));
    Catalog::new(items, enchantments, BTreeMap::new())
}

fn base_value() -> impl Strategy<Value = f64> {
    (0u32..5000).prop_map(f64::from)
}

fn increases() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0u32..200).prop_map(|p| f64::from(p) / 100.0), 1..8)
}

proptest! {
    #[test]
    fn prop_unenchanted_is_identity(
        min in base_value(),
        max in base_value(),
        incs in increases(),
    ) {
        let item = item_with((min, max), 100.0);
        let catalog = catalog_with(&item, &incs);

        let resolution = StatResolver::new(&catalog).resolve(&item, EnchantLevel::NONE);

        prop_assert_eq!(resolution.stats.as_map(), &item.stats);
        prop_assert!(resolution.diagnostic.is_none());
    }

    #[test]
    fn prop_no_enchant_reference_is_identity(
        min in base_value(),
        level in 0u8..=EnchantLevel::MAX,
    ) {
        let mut item = item_with((min, min), 100.0);
        item.enchant_guid = None;
        let catalog = catalog_with(&item, &[0.5]);

        let resolution = StatResolver::new(&catalog).resolve(&item, EnchantLevel::new(level).unwrap());

        prop_assert_eq!(resolution.stats.as_map(), &item.stats);
        prop_assert!(resolution.diagnostic.is_none());
    }

    #[test]
    fn prop_scaled_value_rounds_half_up(
        min in base_value(),
        max in base_value(),
        incs in increases(),
        pick in any::<prop::sample::Index>(),
    ) {
        let item = item_with((min, max), 100.0);
        let catalog = catalog_with(&item, &incs);
        let slot = pick.index(incs.len());
        let level = EnchantLevel::new(slot as u8 + 1).unwrap();

        let stats = StatResolver::new(&catalog).resolve(&item, level).stats;

        let multiplier = 1.0 + incs[slot];
        prop_assert_eq!(
            stats.value_for("Strength", RarityTier::Common),
            Some(round_half_up(min * multiplier))
        );
        prop_assert_eq!(
            stats.max_value_for("Strength", RarityTier::Common),
            Some(round_half_up(max * multiplier))
        );
    }

    #[test]
    fn prop_durability_and_archetype_never_scaled(
        durability in base_value(),
        incs in increases(),
        level in 0u8..=EnchantLevel::MAX,
    ) {
        let item = item_with((10.0, 20.0), durability);
        let catalog = catalog_with(&item, &incs);

        let stats = StatResolver::new(&catalog)
            .resolve(&item, EnchantLevel::new(level).unwrap())
            .stats;

        prop_assert_eq!(stats.get(MAX_DURABILITY), item.stats.get(MAX_DURABILITY));
        prop_assert_eq!(stats.get(ARCHETYPE), item.stats.get(ARCHETYPE));
        prop_assert_eq!(stats.max_durability(RarityTier::Common), Some(durability));
    }

    #[test]
    fn prop_level_beyond_table_matches_unenchanted(
        min in base_value(),
        incs in increases(),
        extra in 1u8..5,
    ) {
        let item = item_with((min, min + 1.0), 100.0);
        let catalog = catalog_with(&item, &incs);
        let resolver = StatResolver::new(&catalog);
        let level = EnchantLevel::new(incs.len() as u8 + extra).unwrap();

        let fallback = resolver.resolve(&item, level);
        let base = resolver.resolve(&item, EnchantLevel::NONE);

        prop_assert_eq!(fallback.stats, base.stats);
        let is_out_of_range = matches!(fallback.diagnostic, Some(Diagnostic::LevelOutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn prop_repeated_selection_is_unchanged(
        min in base_value(),
        incs in increases(),
        tier in prop::sample::select(RarityTier::all().to_vec()),
    ) {
        let item = item_with((min, min), 100.0);
        let catalog = catalog_with(&item, &incs);
        let mut session = CodexSession::new(&catalog);

        let first = session.select_item(Some("item"));
        prop_assert!(matches!(first.stats, StatsUpdate::Changed(_)));
        // Rarity only affects selection, not the stat set.
        let second = session.set_rarity(tier);
        prop_assert_eq!(second.stats, StatsUpdate::Unchanged);
        let third = session.select_item(Some("item"));
        prop_assert_eq!(third.stats, StatsUpdate::Unchanged);
    }

    #[test]
    fn prop_min_value_preferred_over_max(
        min in prop::option::of(base_value()),
        max in prop::option::of(base_value()),
    ) {
        let mut values = Vec::new();
        if let Some(min) = min {
            values.push(("rareMin".to_string(), min));
        }
        if let Some(max) = max {
            values.push(("rareMax".to_string(), max));
        }
        let mut map = StatMap::new();
        map.insert(StatId::from_str("Strength"), RangedStat::new(values).into());
        let stats = ResolvedStats::new(map);

        prop_assert_eq!(stats.value_for("Strength", RarityTier::Rare), min.or(max));
        prop_assert_eq!(stats.max_value_for("Strength", RarityTier::Rare), max.or(min));
        prop_assert_eq!(stats.value_for("Strength", RarityTier::Common), None);
    }

    #[test]
    fn prop_manual_power_matches_formula(
        int_strength in -10_000i64..10_000,
        power_rating in -10_000i64..10_000,
    ) {
        let power = PowerEstimator::default().manual_estimate(int_strength, power_rating);
        let expected = ((int_strength * 3 + power_rating) as f64 / 50.0 * 100.0).round() / 100.0;

        prop_assert_eq!(power.value(), expected);
    }
}

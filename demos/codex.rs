//! Codex walk-through over the sample catalog
//!
//! This example demonstrates:
//! - Loading a catalog from a data directory
//! - Resolving an item at a rarity tier and enchant level
//! - Display ordering, durability and set bonuses
//! - Item-derived power
//!
//! Usage: `cargo run --example codex -- [ITEM_ID] [RARITY] [LEVEL]`
//! Set `RUST_LOG=debug` to see resolution steps.

use codex_stats::bonus::SetBonusSummary;
use codex_stats::*;

fn main() -> Result<(), StatError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let catalog = Catalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample"))?;

    let mut args = std::env::args().skip(1);
    let item_id = args.next();
    let rarity: RarityTier = match args.next() {
        Some(name) => name.parse()?,
        None => RarityTier::Rare,
    };
    let level: EnchantLevel = match args.next() {
        Some(text) => text.parse()?,
        None => EnchantLevel::new(2)?,
    };

    let ids: Vec<String> = match item_id {
        Some(id) => vec![id],
        None => catalog.items().map(|(id, _)| id.to_string()).collect(),
    };

    println!("Catalog: {} items", catalog.len());
    println!("Rarity: {}  Enchant: {}\n", rarity.label(), level);

    let mut session = CodexSession::new(&catalog);
    session.set_rarity(rarity);
    session.set_enchant_level(level);

    for id in &ids {
        let update = session.select_item(Some(id.as_str()));
        let Some(item) = catalog.item(id) else {
            println!("=== {} ===\n  (not in catalog)\n", id);
            continue;
        };

        println!("=== {} ===", item.display_name());
        if let Some(item_type) = item.item_type() {
            println!("Type: {}", item_type);
        }
        if let Some(diagnostic) = &update.diagnostic {
            println!("Note: {}", diagnostic);
        }

        if let Some(stats) = session.stats() {
            let rows = stats.display_order(rarity);
            if rows.is_empty() {
                println!("  (no stats at this rarity)");
            }
            for row in rows {
                println!("  {}: {}", row.label, row.value);
            }
            if let Some(durability) = stats.max_durability(rarity) {
                println!("  Durability: {}", durability);
            }
        }

        match SetBonusSummary::for_item(&catalog, item, rarity) {
            Ok(Some(summary)) => {
                println!("\nSet: {}", summary.name);
                for row in &summary.bonuses {
                    match row.value {
                        Some(value) => {
                            println!("  {} Piece: {} - {}", row.pieces, row.label, value)
                        }
                        None => println!("  {} Piece: {} - n/a", row.pieces, row.label),
                    }
                }
            }
            Ok(None) => {}
            Err(diagnostic) => println!("\nSet: {}", diagnostic),
        }

        if let (Some(min), Some(max)) = (update.item_power.min, update.item_power.max) {
            println!("\nPower: {} - {}\n", min, max);
        }
    }

    Ok(())
}

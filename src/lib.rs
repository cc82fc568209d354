//! # codex_stats - Deterministic Item Stat Resolution
//!
//! Resolves the displayed and numerical attributes of a game item from
//! three independent selectors (item, rarity tier, enchant level) and
//! derives a power rating from them.
//!
//! ## Pipeline
//!
//! ```text
//! [Catalog] + [Selection] → [StatResolver] → [ResolvedStats] → [PowerEstimator] → [PowerRange]
//! ```
//!
//! 1. **Catalog** is loaded once and only borrowed afterwards
//! 2. **StatResolver** applies enchantment scaling (durability and the
//!    archetype marker are exempt) and falls back to base stats with a
//!    `Diagnostic` when enchantment data is missing
//! 3. **ResolvedStats** selects per-tier values and orders stats for display
//! 4. **PowerEstimator** computes `(int_strength * 3 + power_rating) / 50`
//!    for the item's min/max and for manually entered values
//!
//! ## Example
//!
//! ```rust
//! use codex_stats::*;
//!
//! let items = r#"{ "staff-1": {
//!     "name": "Ash Staff",
//!     "stats": {
//!         "Intelligence": { "values": { "commonMin": 10, "commonMax": 20 } },
//!         "MagicalPowerRating": { "values": { "commonMin": 5, "commonMax": 15 } }
//!     }
//! } }"#;
//! let catalog = Catalog::from_json_strs(items, "{}", None).unwrap();
//! let resolver = StatResolver::new(&catalog);
//!
//! let selection = Selection::new().with_item("staff-1");
//! let resolution = resolver.resolve_selection(&selection).unwrap();
//!
//! let estimator = PowerEstimator::default();
//! let range = estimator.estimate(Some(&resolution.stats), selection.rarity);
//! assert_eq!(range.min.unwrap().to_string(), "0.70");
//! assert_eq!(range.max.unwrap().to_string(), "1.50");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Item records, enchantment and set-bonus tables
//! - [`context`] - Selection state
//! - [`resolver`] - Stat resolution with enchantment scaling
//! - [`resolved`] - Resolved stat sets, rarity selection, display order
//! - [`transform`] - Enchantment scaling transform
//! - [`source`] - Power contribution sources
//! - [`power`] - Power estimation
//! - [`bonus`] - Set-bonus aggregation
//! - [`session`] - Selection-driven session with change gating
//! - [`display`] - Display-name decoding and formatting
//! - [`error`] - Error and diagnostic types

pub mod bonus;
pub mod catalog;
pub mod context;
pub mod display;
pub mod error;
pub mod numeric;
pub mod power;
pub mod rarity;
pub mod resolved;
pub mod resolver;
pub mod session;
pub mod source;
pub mod stat_id;
pub mod transform;

// Re-export main types for convenience
pub use catalog::{Catalog, ItemRecord, StatEntry};
pub use context::{EnchantLevel, Selection};
pub use error::{Diagnostic, StatError};
pub use rarity::RarityTier;
pub use resolved::ResolvedStats;
pub use resolver::{Cleared, Resolution, StatResolver};
pub use stat_id::StatId;

pub use bonus::SetBonusSummary;
pub use numeric::StatValue;
pub use power::{Power, PowerEstimator, PowerFormula, PowerRange};
pub use session::{CodexSession, SessionUpdate, StatsUpdate};

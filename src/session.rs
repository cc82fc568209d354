//! Codex session: the presentation boundary.
//!
//! Holds the selectors and the manual inputs, and applies changes one at a
//! time. Every change recomputes the resolved stats and both power
//! estimates before returning, so callers never see a partial update.
//! This is also where change gating lives: the session remembers the last
//! stat set it reported and only reports `Changed` when the new set
//! differs by value.

use crate::catalog::Catalog;
use crate::context::{EnchantLevel, Selection};
use crate::error::Diagnostic;
use crate::power::{Power, PowerEstimator, PowerRange};
use crate::rarity::RarityTier;
use crate::resolved::ResolvedStats;
use crate::resolver::StatResolver;

/// What happened to the resolved stats on a change.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsUpdate {
    /// The stat set differs from the last reported one.
    Changed(ResolvedStats),
    /// Same stat set as last reported; nothing to re-render.
    Unchanged,
    /// The selection was cleared (or names an unknown item).
    Cleared,
}

/// Result of one selection change.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUpdate {
    pub stats: StatsUpdate,
    pub item_power: PowerRange,
    pub manual_power: Power,
    /// Fallback diagnostic from stat resolution, or the reason an
    /// unknown id cleared the view.
    pub diagnostic: Option<Diagnostic>,
}

/// Last reported stats state.
#[derive(Debug, Clone, PartialEq)]
enum Reported {
    Nothing,
    Cleared,
    Stats(ResolvedStats),
}

/// Selection-driven view over a catalog.
///
/// # Examples
///
/// ```rust
/// use codex_stats::session::{CodexSession, StatsUpdate};
/// use codex_stats::{Catalog, RarityTier};
///
/// let items = r#"{ "ring-1": { "name": "Ruby Ring", "stats": {
///     "Strength": { "values": { "commonMin": 10, "commonMax": 20 } },
///     "MagicalPowerRating": { "values": { "commonMin": 5, "commonMax": 15 } }
/// } } }"#;
/// let catalog = Catalog::from_json_strs(items, "{}", None).unwrap();
/// let mut session = CodexSession::new(&catalog);
///
/// let update = session.select_item(Some("ring-1"));
/// assert!(matches!(update.stats, StatsUpdate::Changed(_)));
/// assert_eq!(update.item_power.min.unwrap().to_string(), "0.70");
/// assert_eq!(update.item_power.max.unwrap().to_string(), "1.50");
///
/// // Same stats again: nothing new to report.
/// let update = session.set_rarity(RarityTier::Common);
/// assert_eq!(update.stats, StatsUpdate::Unchanged);
/// ```
#[derive(Debug, Clone)]
pub struct CodexSession<'c> {
    resolver: StatResolver<'c>,
    estimator: PowerEstimator,
    selection: Selection,
    manual_int_strength: i64,
    manual_power_rating: i64,
    current: Option<ResolvedStats>,
    reported: Reported,
}

impl<'c> CodexSession<'c> {
    /// Start a session with nothing selected and the default formula.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_estimator(catalog, PowerEstimator::default())
    }

    /// Start a session with a custom power estimator.
    pub fn with_estimator(catalog: &'c Catalog, estimator: PowerEstimator) -> Self {
        Self {
            resolver: StatResolver::new(catalog),
            estimator,
            selection: Selection::default(),
            manual_int_strength: 0,
            manual_power_rating: 0,
            current: None,
            reported: Reported::Nothing,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current resolved stats; `None` when nothing is selected.
    pub fn stats(&self) -> Option<&ResolvedStats> {
        self.current.as_ref()
    }

    /// Select an item by id, or clear the selection with `None`.
    pub fn select_item(&mut self, item_id: Option<&str>) -> SessionUpdate {
        self.selection.item_id = item_id.map(str::to_string);
        self.recompute()
    }

    pub fn set_rarity(&mut self, rarity: RarityTier) -> SessionUpdate {
        self.selection.rarity = rarity;
        self.recompute()
    }

    pub fn set_enchant_level(&mut self, level: EnchantLevel) -> SessionUpdate {
        self.selection.enchant_level = level;
        self.recompute()
    }

    /// Set the manual Int/Strength field. Affects only `manual_power`.
    pub fn set_manual_int_strength(&mut self, value: i64) -> SessionUpdate {
        self.manual_int_strength = value;
        self.recompute()
    }

    /// Set the manual power rating field. Affects only `manual_power`.
    pub fn set_manual_power_rating(&mut self, value: i64) -> SessionUpdate {
        self.manual_power_rating = value;
        self.recompute()
    }

    fn recompute(&mut self) -> SessionUpdate {
        let (current, diagnostic) = match self.resolver.resolve_selection(&self.selection) {
            Ok(resolution) => (Some(resolution.stats), resolution.diagnostic),
            Err(cleared) => (None, cleared.diagnostic().cloned()),
        };
        self.current = current;

        let stats = self.gate();
        let item_power = self
            .estimator
            .estimate(self.current.as_ref(), self.selection.rarity);
        let manual_power = self
            .estimator
            .manual_estimate(self.manual_int_strength, self.manual_power_rating);

        SessionUpdate {
            stats,
            item_power,
            manual_power,
            diagnostic,
        }
    }

    fn gate(&mut self) -> StatsUpdate {
        match &self.current {
            None => {
                if self.reported == Reported::Cleared {
                    StatsUpdate::Unchanged
                } else {
                    self.reported = Reported::Cleared;
                    StatsUpdate::Cleared
                }
            }
            Some(stats) => {
                if matches!(&self.reported, Reported::Stats(previous) if previous == stats) {
                    StatsUpdate::Unchanged
                } else {
                    self.reported = Reported::Stats(stats.clone());
                    StatsUpdate::Changed(stats.clone())
                }
            }
        }
    }
}

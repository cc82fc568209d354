//! Set-bonus aggregation.
//!
//! Flattens an item's set-bonus table into display rows for one rarity
//! tier. Set bonuses are informational: they are shown next to the item's
//! stats and never merged into `ResolvedStats`.

use crate::catalog::{Catalog, ItemRecord, SetBonus};
use crate::display::{decode_display_name, format_stat_name};
use crate::error::Diagnostic;
use crate::numeric::StatValue;
use crate::rarity::RarityTier;
use crate::stat_id::StatId;

/// One "N Piece: Stat - value" row.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceBonus {
    /// Equipped pieces required.
    pub pieces: u32,
    pub stat_id: StatId,
    pub label: String,
    /// `None` when the bonus has no value for the tier.
    pub value: Option<StatValue>,
}

/// A set's decoded name and its bonus rows for one tier.
///
/// # Examples
///
/// ```rust
/// use codex_stats::bonus::SetBonusSummary;
/// use codex_stats::catalog::SetBonus;
/// use codex_stats::RarityTier;
///
/// let bonus: SetBonus = serde_json::from_str(r#"{
///     "displayName": "NSLOCTEXT(\"\", \"K1\", \"Bone Set\")",
///     "effects": { "2": { "MaxHealth": { "common": 5, "rare": 8 } } }
/// }"#).unwrap();
///
/// let summary = SetBonusSummary::from_bonus(&bonus, RarityTier::Rare);
/// assert_eq!(summary.name, "Bone Set");
/// assert_eq!(summary.bonuses[0].pieces, 2);
/// assert_eq!(summary.bonuses[0].value, Some(8.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SetBonusSummary {
    pub name: String,
    /// Ascending piece count, then stat name.
    pub bonuses: Vec<PieceBonus>,
}

impl SetBonusSummary {
    pub fn from_bonus(bonus: &SetBonus, tier: RarityTier) -> Self {
        let bonuses = bonus
            .effects
            .iter()
            .flat_map(|(&pieces, stats)| {
                stats.iter().map(move |(stat_id, per_rarity)| PieceBonus {
                    pieces,
                    stat_id: stat_id.clone(),
                    label: format_stat_name(stat_id.as_str()),
                    value: per_rarity.get(tier.as_str()).copied(),
                })
            })
            .collect();

        Self {
            name: decode_display_name(&bonus.display_name).to_string(),
            bonuses,
        }
    }

    /// Summary of the item's set bonus.
    ///
    /// `Ok(None)` when the item belongs to no set. A set reference the
    /// catalog does not know is logged and returned as
    /// [`Diagnostic::MissingSetBonus`].
    pub fn for_item(
        catalog: &Catalog,
        item: &ItemRecord,
        tier: RarityTier,
    ) -> Result<Option<Self>, Diagnostic> {
        let Some(set_id) = item.set_bonus_guid.as_deref() else {
            return Ok(None);
        };
        match catalog.set_bonus(set_id) {
            Some(bonus) => Ok(Some(Self::from_bonus(bonus, tier))),
            None => {
                let diagnostic = Diagnostic::MissingSetBonus {
                    set_id: set_id.to_string(),
                };
                tracing::warn!("{}", diagnostic);
                Err(diagnostic)
            }
        }
    }

    /// Rows unlocked with `equipped` pieces.
    pub fn active(&self, equipped: u32) -> impl Iterator<Item = &PieceBonus> {
        self.bonuses.iter().filter(move |row| row.pieces <= equipped)
    }

    pub fn is_empty(&self) -> bool {
        self.bonuses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn bonus() -> SetBonus {
        serde_json::from_str(
            r#"{
                "displayName": "Plain Set",
                "effects": {
                    "4": { "MoveSpeed": { "common": 3 } },
                    "2": { "Strength": { "common": 1, "epic": 4 }, "Agility": { "epic": 2 } }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_rows_ordered_by_pieces_then_stat() {
        let summary = SetBonusSummary::from_bonus(&bonus(), RarityTier::Common);
        let rows: Vec<(u32, &str, Option<StatValue>)> = summary
            .bonuses
            .iter()
            .map(|row| (row.pieces, row.stat_id.as_str(), row.value))
            .collect();
        assert_eq!(
            rows,
            vec![
                (2, "Agility", None),
                (2, "Strength", Some(1.0)),
                (4, "MoveSpeed", Some(3.0)),
            ]
        );
        assert_eq!(summary.name, "Plain Set");
        assert_eq!(summary.bonuses[2].label, "Move Speed");
    }

    #[test]
    fn test_active_rows() {
        let summary = SetBonusSummary::from_bonus(&bonus(), RarityTier::Epic);
        assert_eq!(summary.active(1).count(), 0);
        assert_eq!(summary.active(2).count(), 2);
        assert_eq!(summary.active(4).count(), 3);
    }

    #[test]
    fn test_for_item_lookup() {
        let mut sets = BTreeMap::new();
        sets.insert("set-1".to_string(), bonus());
        let catalog = Catalog::new(BTreeMap::new(), BTreeMap::new(), sets);

        let with_set = ItemRecord {
            set_bonus_guid: Some("set-1".to_string()),
            ..ItemRecord::default()
        };
        let missing_set = ItemRecord {
            set_bonus_guid: Some("set-9".to_string()),
            ..ItemRecord::default()
        };

        let found = SetBonusSummary::for_item(&catalog, &with_set, RarityTier::Common).unwrap();
        assert_eq!(found.unwrap().name, "Plain Set");
        assert_eq!(
            SetBonusSummary::for_item(&catalog, &missing_set, RarityTier::Common),
            Err(Diagnostic::MissingSetBonus {
                set_id: "set-9".to_string()
            })
        );
        assert_eq!(
            SetBonusSummary::for_item(&catalog, &ItemRecord::default(), RarityTier::Common),
            Ok(None)
        );
    }
}

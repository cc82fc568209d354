//! Item catalog module.
//!
//! The catalog is the read-only data every other component works over:
//! item records, enchantment tables and set-bonus tables. It is built
//! once (usually from the JSON data files) and then only borrowed.

use crate::error::StatError;
use crate::numeric::StatValue;
use crate::stat_id::StatId;
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Item catalog file name inside a data directory.
pub const ITEMS_FILE: &str = "all_items_data.json";
/// Enchantment table file name inside a data directory.
pub const ENCHANTMENTS_FILE: &str = "enchantment_data.json";
/// Set-bonus table file name inside a data directory (optional).
pub const SET_BONUS_FILE: &str = "set_bonus_data.json";

/// Stat name to stat entry, as stored on an item.
pub type StatMap = BTreeMap<StatId, StatEntry>;

/// One value inside a ranged stat's `values` map.
///
/// Numbers are the per-tier Min/Max values; anything else (a `null`
/// placeholder, a display hint) is kept as raw JSON and never scaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeValue {
    Number(StatValue),
    Other(serde_json::Value),
}

impl RangeValue {
    pub fn as_number(&self) -> Option<StatValue> {
        match self {
            RangeValue::Number(value) => Some(*value),
            RangeValue::Other(_) => None,
        }
    }
}

impl From<StatValue> for RangeValue {
    fn from(value: StatValue) -> Self {
        RangeValue::Number(value)
    }
}

/// A stat with one Min/Max pair per rarity tier.
///
/// `values` keys look like `"rareMin"` / `"rareMax"`; any other key is
/// carried along untouched. Presence of the `values` map alone makes an
/// entry ranged, whatever the map holds.
///
/// # Examples
///
/// ```rust
/// use codex_stats::catalog::{RangedStat, StatEntry};
///
/// let entry: StatEntry = serde_json::from_str(
///     r#"{ "values": { "commonMin": 10, "commonMax": null, "displayFormat": "flat" } }"#,
/// ).unwrap();
/// let ranged = entry.as_ranged().unwrap();
/// assert_eq!(ranged.value("commonMin"), Some(10.0));
/// assert_eq!(ranged.value("commonMax"), None);
/// assert_eq!(ranged.values.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangedStat {
    pub values: BTreeMap<String, RangeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
}

impl RangedStat {
    /// Build a ranged stat from numeric key/value pairs.
    pub fn new(values: impl IntoIterator<Item = (String, StatValue)>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(key, value)| (key, RangeValue::Number(value)))
                .collect(),
            archetype: None,
        }
    }

    /// Set the stat's archetype (`"Core"` sorts last in display order).
    pub fn with_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.archetype = Some(archetype.into());
        self
    }

    /// Numeric value under `key`; `None` when absent or not a number.
    pub fn value(&self, key: &str) -> Option<StatValue> {
        self.values.get(key).and_then(RangeValue::as_number)
    }

    /// Display-ordering class: `"Core"` stats are listed last.
    pub fn is_core(&self) -> bool {
        self.archetype.as_deref() == Some("Core")
    }
}

/// Explicit `{min, max}` pair.
///
/// Only objects made of `min` and/or `max` match; any other key rejects
/// the shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<StatValue>,
}

/// One entry of an item's `stats` mapping.
///
/// Deserialization tries the variants top to bottom, so an object with a
/// `values` map is `Ranged`, a `{min, max}` object is `Bounds` and any
/// other object lands in `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatEntry {
    /// Per-tier Min/Max values.
    Ranged(RangedStat),
    /// Single number, e.g. a legacy `intStrength: 40`.
    Scalar(StatValue),
    /// Legacy `{min, max}` object.
    Bounds(Bounds),
    /// Bare string, e.g. the stats-level `archetype` marker.
    Tag(String),
    /// Anything else found in the data.
    Other(serde_json::Value),
}

impl StatEntry {
    pub fn as_ranged(&self) -> Option<&RangedStat> {
        match self {
            StatEntry::Ranged(ranged) => Some(ranged),
            _ => None,
        }
    }
}

impl From<RangedStat> for StatEntry {
    fn from(ranged: RangedStat) -> Self {
        StatEntry::Ranged(ranged)
    }
}

/// Immutable catalog record for one item.
///
/// Display-only metadata is read leniently: a field with an unexpected
/// shape (`"level": 12.5`, `"itemTypeTags": null`) becomes its default
/// instead of failing the whole catalog. References and stats are strict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Vec::is_empty")]
    pub item_type_tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub item_description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub display_icon: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enchant_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_bonus_guid: Option<String>,
    /// Absent in the data means no stats.
    #[serde(default)]
    pub stats: StatMap,
}

/// Deserialize `T`, falling back to `T::default()` on a shape mismatch.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

impl ItemRecord {
    /// `name`, then `itemName`, then `"Unknown Item"`.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.item_name.as_deref())
            .unwrap_or("Unknown Item")
    }

    /// First type tag, if any.
    pub fn item_type(&self) -> Option<&str> {
        self.item_type_tags.first().map(String::as_str)
    }

    /// Icon reference; the data uses `"NA"` for "no icon".
    pub fn icon(&self) -> Option<&str> {
        self.display_icon.as_deref().filter(|icon| *icon != "NA")
    }
}

/// Per-level enchantment data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    #[serde(
        rename = "PrimaryStatIncrease",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_stat_increase: Option<StatValue>,
}

impl LevelData {
    pub fn new(primary_stat_increase: StatValue) -> Self {
        Self {
            primary_stat_increase: Some(primary_stat_increase),
        }
    }

    /// Fractional increase; absent means 0.
    pub fn increase(&self) -> StatValue {
        self.primary_stat_increase.unwrap_or(0.0)
    }
}

/// Enchantment levels in the order the data file lists them.
///
/// Level *N* (1-indexed) is the *N*-th entry. A `null` level body is kept
/// as a slot with no data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnchantLevels(Vec<(String, Option<LevelData>)>);

impl EnchantLevels {
    /// Number of level slots, including ones without data.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Level slot for a 1-indexed level. `None` for 0 or past the end.
    pub fn slot(&self, level: u8) -> Option<(&str, Option<&LevelData>)> {
        let index = usize::from(level).checked_sub(1)?;
        self.0
            .get(index)
            .map(|(id, data)| (id.as_str(), data.as_ref()))
    }

    /// Level slots in order, level 1 first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&LevelData>)> {
        self.0.iter().map(|(id, data)| (id.as_str(), data.as_ref()))
    }
}

impl<K: Into<String>> FromIterator<(K, Option<LevelData>)> for EnchantLevels {
    fn from_iter<I: IntoIterator<Item = (K, Option<LevelData>)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, data)| (id.into(), data)).collect())
    }
}

impl Serialize for EnchantLevels {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(id, data)| (id, data)))
    }
}

impl<'de> Deserialize<'de> for EnchantLevels {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LevelsVisitor;

        impl<'de> Visitor<'de> for LevelsVisitor {
            type Value = EnchantLevels;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of enchant level id to level data")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut levels = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, data)) = map.next_entry::<String, Option<LevelData>>()? {
                    levels.push((id, data));
                }
                Ok(EnchantLevels(levels))
            }
        }

        deserializer.deserialize_map(LevelsVisitor)
    }
}

/// Enchantment table referenced by `ItemRecord::enchant_guid`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnchantmentTable {
    #[serde(default)]
    pub levels: EnchantLevels,
}

impl EnchantmentTable {
    /// Create a table from its ordered levels.
    pub fn new(levels: EnchantLevels) -> Self {
        Self { levels }
    }
}

/// Per-rarity values of one set-bonus stat, keyed by tier name.
pub type RarityValues = BTreeMap<String, StatValue>;

/// Set-bonus table referenced by `ItemRecord::set_bonus_guid`.
///
/// `effects` maps the number of equipped pieces to the stats it grants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBonus {
    /// Raw name, possibly wrapped in a `NSLOCTEXT(...)` marker.
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub effects: BTreeMap<u32, BTreeMap<StatId, RarityValues>>,
}

/// Read-only repository of items, enchantment tables and set bonuses.
///
/// Build it once, then lend `&Catalog` to the resolver, the set-bonus
/// aggregation and the session.
///
/// # Examples
///
/// ```rust
/// use codex_stats::Catalog;
///
/// let items = r#"{
///     "sword-1": {
///         "name": "Arming Sword",
///         "stats": { "Strength": { "values": { "commonMin": 10, "commonMax": 20 } } }
///     }
/// }"#;
/// let catalog = Catalog::from_json_strs(items, "{}", None).unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.item("sword-1").unwrap().display_name(), "Arming Sword");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: BTreeMap<String, ItemRecord>,
    enchantments: BTreeMap<String, EnchantmentTable>,
    set_bonuses: BTreeMap<String, SetBonus>,
}

impl Catalog {
    /// Build a catalog from already-parsed tables.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use codex_stats::catalog::{Catalog, ItemRecord};
    /// use std::collections::BTreeMap;
    ///
    /// let mut items = BTreeMap::new();
    /// items.insert("ring-1".to_string(), ItemRecord::default());
    /// let catalog = Catalog::new(items, BTreeMap::new(), BTreeMap::new());
    ///
    /// assert!(catalog.item("ring-1").is_some());
    /// assert!(catalog.enchantment("none").is_none());
    /// ```
    pub fn new(
        items: BTreeMap<String, ItemRecord>,
        enchantments: BTreeMap<String, EnchantmentTable>,
        set_bonuses: BTreeMap<String, SetBonus>,
    ) -> Self {
        Self {
            items,
            enchantments,
            set_bonuses,
        }
    }

    /// Parse the three catalog documents. The set-bonus document is optional.
    pub fn from_json_strs(
        items: &str,
        enchantments: &str,
        set_bonuses: Option<&str>,
    ) -> Result<Self, StatError> {
        let items: BTreeMap<String, ItemRecord> = serde_json::from_str(items)?;
        let enchantments: BTreeMap<String, EnchantmentTable> =
            serde_json::from_str(enchantments)?;
        let set_bonuses: BTreeMap<String, SetBonus> = match set_bonuses {
            Some(content) => serde_json::from_str(content)?,
            None => BTreeMap::new(),
        };
        Ok(Self::new(items, enchantments, set_bonuses))
    }

    /// Load the catalog files from a data directory.
    ///
    /// Reads [`ITEMS_FILE`] and [`ENCHANTMENTS_FILE`]; [`SET_BONUS_FILE`]
    /// is read when present.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, StatError> {
        let dir = dir.as_ref();
        let items = read_file(&dir.join(ITEMS_FILE))?;
        let enchantments = read_file(&dir.join(ENCHANTMENTS_FILE))?;
        let set_bonus_path = dir.join(SET_BONUS_FILE);
        let set_bonuses = if set_bonus_path.is_file() {
            Some(read_file(&set_bonus_path)?)
        } else {
            None
        };

        let catalog = Self::from_json_strs(&items, &enchantments, set_bonuses.as_deref())?;
        tracing::info!(
            items = catalog.items.len(),
            enchantments = catalog.enchantments.len(),
            set_bonuses = catalog.set_bonuses.len(),
            "loaded catalog from {}",
            dir.display()
        );
        Ok(catalog)
    }

    /// Look up an item by id.
    pub fn item(&self, item_id: &str) -> Option<&ItemRecord> {
        self.items.get(item_id)
    }

    /// Look up an enchantment table by the id items reference.
    pub fn enchantment(&self, enchant_id: &str) -> Option<&EnchantmentTable> {
        self.enchantments.get(enchant_id)
    }

    /// Look up a set-bonus table by the id items reference.
    pub fn set_bonus(&self, set_id: &str) -> Option<&SetBonus> {
        self.set_bonuses.get(set_id)
    }

    /// Items in id order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &ItemRecord)> {
        self.items.iter().map(|(id, item)| (id.as_str(), item))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn read_file(path: &Path) -> Result<String, StatError> {
    std::fs::read_to_string(path).map_err(|source| StatError::Io {
        path: path.to_path_buf(),
        source,
    })
}

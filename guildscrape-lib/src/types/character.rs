use std::collections::BTreeMap;

use serde::Serialize;
use strum::{Display, EnumIter};

/// Raid difficulties tracked for boss kills
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Normal mode
    Normal,
    /// Heroic mode
    Heroic,
    /// Mythic mode
    Mythic,
}

/// Boss kill completion for one raid and one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BossKills {
    /// Number of bosses killed at least once
    pub downed: usize,
    /// Number of bosses in the raid
    pub total: usize,
}

/// Completion of one raid, with one entry per [`Difficulty`]
pub type RaidProgress = BTreeMap<Difficulty, BossKills>;

/// A single guild member with resolved class and race names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    /// Normalized region the character was fetched from
    pub region: String,
    /// Realm of the character
    pub realm: String,
    /// Character name
    pub name: String,
    /// Class display name
    pub class: String,
    /// Race display name
    pub race: String,
    /// Character level
    pub level: u32,
    /// Average item level of the equipped items
    #[serde(rename = "ilvl")]
    pub item_level: f64,
    /// Progress per tracked raid, keyed by raid name
    pub progress: BTreeMap<String, RaidProgress>,
}

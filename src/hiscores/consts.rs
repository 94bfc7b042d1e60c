use std::collections::HashMap;

use serde::{Serialize, Deserialize};

/// Skill rows of the main-game tables, in hiscore order
pub const SKILL_NAMES: &[&str] = &[
    "Overall", "Attack", "Defence", "Strength", "Constitution", "Ranged",
    "Prayer", "Magic", "Cooking", "Woodcutting", "Fletching", "Fishing",
    "Firemaking", "Crafting", "Smithing", "Mining", "Herblore", "Agility",
    "Thieving", "Slayer", "Farming", "Runecrafting", "Hunter", "Construction",
    "Summoning", "Dungeoneering", "Divination", "Invention"
];

/// Activity rows of the main-game tables, in hiscore order
pub const ACTIVITY_NAMES: &[&str] = &[
    "Bounty Hunters", "BH Rogues", "Dominion Tower", "The Crucible",
    "Castle Wars Games", "B.A. Attackers", "B.A. Defenders", "B.A. Collectors",
    "B.A. Healers", "Duel Tournament", "Mobilising Armies", "Conquest",
    "Fist of Guthix", "GG: Resource Race", "GG: Athletics",
    "WE2: Armadyl Lifetime Contribution", "WE2: Bandos Lifetime Contribution",
    "WE2: Armadyl PvP Kills", "WE2: Bandos PvP Kills", "Heist Guard Level",
    "Heist Robber Level", "CFP: 5 Game Average"
];

/// Skill rows of the oldschool tables: the main list up to Construction
pub const OLDSCHOOL_SKILL_NAMES: &[&str] = &[
    "Overall", "Attack", "Defence", "Strength", "Constitution", "Ranged",
    "Prayer", "Magic", "Cooking", "Woodcutting", "Fletching", "Fishing",
    "Firemaking", "Crafting", "Smithing", "Mining", "Herblore", "Agility",
    "Thieving", "Slayer", "Farming", "Runecrafting", "Hunter", "Construction"
];

/// Activity rows of the oldschool tables
pub const OLDSCHOOL_ACTIVITY_NAMES: &[&str] = &[
    "Clue Scrolls (Easy)", "Clue Scrolls (Medium)", "Clue Scrolls (All)"
];

/// Configuration record of one hiscore table: its endpoint path and the
/// ordered row names its CSV carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub path: &'static str,
    pub skill_names: &'static [&'static str],
    pub activity_names: &'static [&'static str]
}

/// A type of hiscore table published by the web services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Table {
    Default,
    Ironman,
    HardcoreIronman,
    Oldschool,
    OldschoolIronman,
    OldschoolUltimateIronman
}

impl Default for Table {
    #[inline]
    fn default() -> Self {
        Self::Default
    }
}

lazy_static::lazy_static! {
    /// Tag → configuration lookup, built once per process
    static ref TABLES: HashMap<Table, TableConfig> = HashMap::from([
        (Table::Default, TableConfig {
            path: "hiscore",
            skill_names: SKILL_NAMES,
            activity_names: ACTIVITY_NAMES
        }),

        (Table::Ironman, TableConfig {
            path: "hiscore_ironman",
            skill_names: SKILL_NAMES,
            activity_names: ACTIVITY_NAMES
        }),

        (Table::HardcoreIronman, TableConfig {
            path: "hiscore_hardcore_ironman",
            skill_names: SKILL_NAMES,
            activity_names: ACTIVITY_NAMES
        }),

        (Table::Oldschool, TableConfig {
            path: "hiscore_oldschool",
            skill_names: OLDSCHOOL_SKILL_NAMES,
            activity_names: OLDSCHOOL_ACTIVITY_NAMES
        }),

        (Table::OldschoolIronman, TableConfig {
            path: "hiscore_oldschool_ironman",
            skill_names: OLDSCHOOL_SKILL_NAMES,
            activity_names: OLDSCHOOL_ACTIVITY_NAMES
        }),

        (Table::OldschoolUltimateIronman, TableConfig {
            path: "hiscore_oldschool_ultimate",
            skill_names: OLDSCHOOL_SKILL_NAMES,
            activity_names: OLDSCHOOL_ACTIVITY_NAMES
        })
    ]);
}

impl Table {
    #[inline]
    pub fn list() -> &'static [Table] {
        &[
            Self::Default,
            Self::Ironman,
            Self::HardcoreIronman,
            Self::Oldschool,
            Self::OldschoolIronman,
            Self::OldschoolUltimateIronman
        ]
    }

    /// Configuration record of this table
    #[inline]
    pub fn config(&self) -> &'static TableConfig {
        &TABLES[self]
    }

    /// Path segment of this table on the web-services host
    #[inline]
    pub fn path(&self) -> &'static str {
        self.config().path
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown hiscore table {0}")]
pub struct ParseTableError(pub String);

impl std::str::FromStr for Table {
    type Err = ParseTableError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Table::list().iter()
            .find(|table| table.path() == name)
            .copied()
            .ok_or_else(|| ParseTableError(name.to_string()))
    }
}

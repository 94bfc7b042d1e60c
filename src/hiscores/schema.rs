use std::collections::HashMap;

use serde::{Serialize, Deserialize};

/// One skill row of a player's hiscore table
///
/// The service reports unranked rows as `-1`; the accessor methods expose
/// those fields as options instead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub rank: i64,
    pub level: i32,
    pub xp: i64
}

impl Skill {
    /// Rank of the player in this skill, if the table ranks them at all
    #[inline]
    pub fn rank(&self) -> Option<u64> {
        (self.rank >= 0).then_some(self.rank as u64)
    }

    /// Experience of the player in this skill, if the table ranks them at all
    #[inline]
    pub fn xp(&self) -> Option<u64> {
        (self.xp >= 0).then_some(self.xp as u64)
    }
}

/// One activity row of a player's hiscore table
///
/// The service reports unranked rows as `-1`; the accessor methods expose
/// those fields as options instead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    pub rank: i64,
    pub score: i64
}

impl Activity {
    /// Rank of the player in this activity, if the table ranks them at all
    #[inline]
    pub fn rank(&self) -> Option<u64> {
        (self.rank >= 0).then_some(self.rank as u64)
    }

    /// Score of the player in this activity, if the table ranks them at all
    #[inline]
    pub fn score(&self) -> Option<u64> {
        (self.score >= 0).then_some(self.score as u64)
    }
}

/// Rankings of a single player, keyed by the row names of the table
/// they were requested from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub skills: HashMap<String, Skill>,
    pub activities: HashMap<String, Activity>
}

/// One member of a clan, as listed by the clan hiscores
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClanMate {
    pub name: String,
    pub rank: String,
    pub experience: u64,
    pub kills: u32
}

use std::collections::HashMap;

use serde::{Serialize, Deserialize};

/// One entry of the beast search endpoints
///
/// The service emits a null label for a handful of unnamed entries;
/// reshaping into lookup maps drops those
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    pub value: u32,
    pub label: Option<String>
}

/// Full `beastData.json` record of a single beast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beast {
    pub name: String,
    pub id: u32,
    pub description: String,
    pub weakness: Option<String>,
    pub attackable: bool,
    pub aggressive: bool,
    pub poisonous: bool,

    // The service quotes this number: "269.4"
    pub xp: String,

    pub lifepoints: u32,
    pub level: u32,
    pub defence: u32,
    pub attack: u32,
    pub magic: u32,
    pub ranged: u32,
    pub size: u32,
    pub members: bool,
    pub slayercat: Option<String>,
    pub slayerlevel: Option<u32>,

    #[serde(default)]
    pub animations: HashMap<String, u32>,

    #[serde(default)]
    pub areas: Vec<String>
}

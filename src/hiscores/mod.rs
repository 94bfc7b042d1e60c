pub mod consts;
pub mod schema;

use std::collections::HashMap;

use crate::client::{self, Error};

pub use consts::{
    Table,
    TableConfig,
    ParseTableError
};

use schema::{
    Activity,
    ClanMate,
    Player,
    Skill
};

/// Rankings of a single player on a given hiscore table
///
/// Returns `Ok(None)` for players the table doesn't rank
#[tracing::instrument(level = "trace", skip(display_name))]
pub fn player_information(display_name: impl AsRef<str>, table: Table) -> Result<Option<Player>, Error> {
    let display_name = display_name.as_ref();

    if display_name.trim().is_empty() {
        return Err(Error::InvalidArgument(String::from("display name must not be empty")));
    }

    tracing::trace!("Fetching player hiscores");

    let player = display_name.replace(' ', "+");
    let url = format!("{}/m={}/index_lite.ws?player={player}", *crate::WEB_SERVICES_URL, table.path());

    match client::fetch_csv(&url)? {
        Some(records) => parse_player(&url, &records, table.config()),
        None => Ok(None)
    }
}

/// Pair the CSV rows with the table's row names
///
/// The feed carries one skill row per skill name followed by one activity
/// row per activity name; a shorter response means the table doesn't know
/// the player
fn parse_player(url: &str, records: &[csv::StringRecord], config: &TableConfig) -> Result<Option<Player>, Error> {
    let TableConfig { skill_names, activity_names, .. } = config;

    if records.len() < skill_names.len() + activity_names.len() {
        return Ok(None);
    }

    let mut skills = HashMap::new();
    let mut activities = HashMap::new();

    for (name, record) in skill_names.iter().zip(records) {
        let (rank, level, xp) = decode_record(url, record)?;

        skills.insert(name.to_string(), Skill { rank, level, xp });
    }

    for (name, record) in activity_names.iter().zip(&records[skill_names.len()..]) {
        let (rank, score) = decode_record(url, record)?;

        activities.insert(name.to_string(), Activity { rank, score });
    }

    Ok(Some(Player { skills, activities }))
}

/// Members of a clan, as listed by the clan hiscores
///
/// A clan the service doesn't know reshapes to an empty list. The first
/// record is the column header; records of unexpected width are skipped
#[tracing::instrument(level = "trace", skip(clan_name))]
pub fn clan_information(clan_name: impl AsRef<str>) -> Result<Vec<ClanMate>, Error> {
    let clan_name = clan_name.as_ref();

    if clan_name.trim().is_empty() {
        return Err(Error::InvalidArgument(String::from("clan name must not be empty")));
    }

    tracing::trace!("Fetching clan members");

    let clan = clan_name.replace(' ', "+");
    let url = format!("{}/m=clan-hiscores/members_lite.ws?clanName={clan}", *crate::WEB_SERVICES_URL);

    let Some(records) = client::fetch_csv(&url)? else {
        return Ok(Vec::new());
    };

    let mut members = Vec::with_capacity(records.len().saturating_sub(1));

    for record in records.iter().skip(1) {
        if record.len() != 4 {
            continue;
        }

        let (name, rank, experience, kills): (String, String, u64, u32) = decode_record(&url, record)?;

        members.push(ClanMate {
            // The feed pads display names with non-breaking spaces
            name: name.replace('\u{a0}', " "),
            rank,
            experience,
            kills
        });
    }

    Ok(members)
}

fn decode_record<'a, T: serde::Deserialize<'a>>(url: &str, record: &'a csv::StringRecord) -> Result<T, Error> {
    record.deserialize(None).map_err(|source| Error::Decode {
        url: url.to_string(),
        source: source.into()
    })
}

pub mod schema;

use std::collections::HashMap;

use crate::client::{self, Error};

use schema::{Beast, SearchResult};

fn bestiary_url(function: &str) -> String {
    format!("{}/m=itemdb_rs/bestiary/{function}", *crate::WEB_SERVICES_URL)
}

/// Reshape raw search results into a beast id → beast name map
///
/// Entries without a label are dropped, and an absent raw result reshapes
/// to an empty map. The service doesn't define duplicate ids; should one
/// appear anyway, the last entry wins
pub(crate) fn results_to_map(results: Option<Vec<SearchResult>>) -> HashMap<u32, String> {
    let mut map = HashMap::new();

    for result in results.unwrap_or_default() {
        if let Some(label) = result.label {
            map.insert(result.value, label);
        }
    }

    map
}

/// Get a beast by its id
#[tracing::instrument(level = "trace")]
pub fn beast_data(beast_id: u32) -> Result<Option<Beast>, Error> {
    tracing::trace!("Fetching beast data");

    client::fetch_json(&format!("{}?beastid={beast_id}", bestiary_url("beastData.json")))
}

/// Search beast ids by a set of terms
#[tracing::instrument(level = "trace", skip(terms))]
pub fn search_by_terms<I>(terms: I) -> Result<HashMap<u32, String>, Error>
where
    I: IntoIterator,
    I::Item: AsRef<str>
{
    tracing::trace!("Searching beasts by terms");

    let term = terms.into_iter()
        .map(|term| term.as_ref().replace(' ', "+"))
        .collect::<Vec<_>>()
        .join("+");

    Ok(results_to_map(client::fetch_json(&format!("{}?term={term}", bestiary_url("beastSearch.json")))?))
}

/// Search beasts by the first letter of their name
#[tracing::instrument(level = "trace")]
pub fn search_by_first_letter(letter: char) -> Result<HashMap<u32, String>, Error> {
    if !letter.is_ascii_alphabetic() {
        return Err(Error::InvalidArgument(format!("search letter must be an ascii letter, got {letter:?}")));
    }

    tracing::trace!("Searching beasts by first letter");

    Ok(results_to_map(client::fetch_json(&format!("{}?letter={letter}", bestiary_url("bestiaryNames.json")))?))
}

/// List all area names known to the bestiary
#[tracing::instrument(level = "trace")]
pub fn area_names() -> Result<Vec<String>, Error> {
    tracing::trace!("Fetching area names");

    Ok(client::fetch_json(&bestiary_url("areaNames.json"))?.unwrap_or_default())
}

/// Search for the beasts found in a given area
#[tracing::instrument(level = "trace", skip(area))]
pub fn beasts_in_area(area: impl AsRef<str>) -> Result<HashMap<u32, String>, Error> {
    let area = area.as_ref();

    if area.trim().is_empty() {
        return Err(Error::InvalidArgument(String::from("area name must not be empty")));
    }

    tracing::trace!("Fetching beasts in area");

    let identifier = area.replace(' ', "+");

    Ok(results_to_map(client::fetch_json(&format!("{}?identifier={identifier}", bestiary_url("areaBeasts.json")))?))
}

/// Map of Slayer category names to their ids
#[tracing::instrument(level = "trace")]
pub fn slayer_categories() -> Result<HashMap<String, u32>, Error> {
    tracing::trace!("Fetching slayer categories");

    Ok(client::fetch_json(&bestiary_url("slayerCatNames.json"))?.unwrap_or_default())
}

/// Search for the beasts in a Slayer category by category id
#[tracing::instrument(level = "trace")]
pub fn beasts_in_slayer_category(category_id: u32) -> Result<HashMap<u32, String>, Error> {
    tracing::trace!("Fetching beasts in slayer category");

    Ok(results_to_map(client::fetch_json(&format!("{}?identifier={category_id}", bestiary_url("slayerBeasts.json")))?))
}

/// Search for the beasts in a Slayer category by category name
///
/// Resolves the name through [`slayer_categories`] first; an unknown name
/// short-circuits to an empty map without a second request
#[tracing::instrument(level = "trace", skip(category_name))]
pub fn beasts_in_slayer_category_named(category_name: impl AsRef<str>) -> Result<HashMap<u32, String>, Error> {
    match slayer_categories()?.get(category_name.as_ref()) {
        Some(&id) => beasts_in_slayer_category(id),
        None => Ok(HashMap::new())
    }
}

/// Map of weakness names to their ids
#[tracing::instrument(level = "trace")]
pub fn weaknesses() -> Result<HashMap<String, u32>, Error> {
    tracing::trace!("Fetching weaknesses");

    Ok(client::fetch_json(&bestiary_url("weaknessNames.json"))?.unwrap_or_default())
}

/// Search for the beasts that are weak to a specific weakness, by weakness id
#[tracing::instrument(level = "trace")]
pub fn beasts_weak_to(weakness_id: u32) -> Result<HashMap<u32, String>, Error> {
    tracing::trace!("Fetching beasts weak to weakness");

    Ok(results_to_map(client::fetch_json(&format!("{}?identifier={weakness_id}", bestiary_url("weaknessBeasts.json")))?))
}

/// Search for the beasts that are weak to a specific weakness, by weakness name
///
/// Resolves the name through [`weaknesses`] first; an unknown name
/// short-circuits to an empty map without a second request
#[tracing::instrument(level = "trace", skip(weakness_name))]
pub fn beasts_weak_to_named(weakness_name: impl AsRef<str>) -> Result<HashMap<u32, String>, Error> {
    match weaknesses()?.get(weakness_name.as_ref()) {
        Some(&id) => beasts_weak_to(id),
        None => Ok(HashMap::new())
    }
}

/// Search for the beasts inside a bracket of combat levels
#[tracing::instrument(level = "trace")]
pub fn beasts_in_level_group(lower_bound: u32, upper_bound: u32) -> Result<HashMap<u32, String>, Error> {
    if upper_bound <= lower_bound {
        return Err(Error::InvalidArgument(format!("upper bound {upper_bound} must exceed lower bound {lower_bound}")));
    }

    tracing::trace!("Fetching beasts in level group");

    Ok(results_to_map(client::fetch_json(&format!("{}?identifier={lower_bound}-{upper_bound}", bestiary_url("levelGroup.json")))?))
}

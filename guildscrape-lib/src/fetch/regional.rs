use std::collections::HashMap;

use log::info;
use serde::Deserialize;

use super::decode;
use crate::{ApiClient, RegionalInfo, Result, normalize_name};

const RACES_PATH: &str = "/wow/data/character/races";
const CLASSES_PATH: &str = "/wow/data/character/classes";

#[derive(Debug, Deserialize)]
struct RacesResponse {
    races: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct ClassesResponse {
    classes: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    id: u32,
    name: String,
}

fn into_table(entries: Vec<Entry>) -> HashMap<u32, String> {
    entries
        .into_iter()
        .map(|entry| (entry.id, entry.name))
        .collect()
}

/// Fetch the race and class tables of a region.
///
/// Issues two requests, one after the other.
///
/// # Errors
///
/// Fails with [`ErrorKind::Decode`](crate::ErrorKind::Decode) if a response
/// lacks its `races` or `classes` array, or with any error of
/// [`ApiClient::get`].
pub async fn fetch_regional_info(client: &ApiClient, region: &str) -> Result<RegionalInfo> {
    let races: RacesResponse = decode(client.get(RACES_PATH, &[], region).await?, || {
        format!("race list of region `{region}`")
    })?;
    let classes: ClassesResponse = decode(client.get(CLASSES_PATH, &[], region).await?, || {
        format!("class list of region `{region}`")
    })?;

    Ok(RegionalInfo::new(
        into_table(races.races),
        into_table(classes.classes),
    ))
}

/// Fetch the regional info of every distinct region, keyed by normalized
/// region name.
///
/// Regions are fetched sequentially; duplicates (after normalization) are
/// only fetched once.
///
/// # Errors
///
/// Returns the first error of [`fetch_regional_info`].
pub async fn fetch_regional_infos<'a, I>(
    client: &ApiClient,
    regions: I,
) -> Result<HashMap<String, RegionalInfo>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut infos = HashMap::new();
    for region in regions {
        let region = normalize_name(region);
        if infos.contains_key(&region) {
            continue;
        }
        let info = fetch_regional_info(client, &region).await?;
        infos.insert(region, info);
    }

    let mut loaded: Vec<_> = infos.keys().map(String::as_str).collect();
    loaded.sort_unstable();
    info!(
        "Loaded info for {} region(s) ({})",
        loaded.len(),
        loaded.join(", ")
    );
    Ok(infos)
}

use std::collections::BTreeMap;

use serde::Deserialize;
use strum::IntoEnumIterator;

use super::{decode, segment};
use crate::{
    ApiClient, BossKills, Character, Difficulty, FetchOptions, RaidProgress, RegionalInfo, Result,
};

#[derive(Debug, Deserialize)]
struct CharacterResponse {
    level: u32,
    class: u32,
    race: u32,
    items: Items,
    progression: Progression,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Items {
    average_item_level: f64,
}

#[derive(Debug, Deserialize)]
struct Progression {
    raids: Vec<Raid>,
}

#[derive(Debug, Deserialize)]
struct Raid {
    name: String,
    #[serde(default)]
    bosses: Vec<Boss>,
}

/// Kill counters of one boss. Counters are absent for difficulties a raid
/// does not have.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Boss {
    #[serde(default)]
    normal_kills: i64,
    #[serde(default)]
    heroic_kills: i64,
    #[serde(default)]
    mythic_kills: i64,
}

impl Boss {
    const fn kills(&self, difficulty: Difficulty) -> i64 {
        match difficulty {
            Difficulty::Normal => self.normal_kills,
            Difficulty::Heroic => self.heroic_kills,
            Difficulty::Mythic => self.mythic_kills,
        }
    }
}

fn raid_progress(bosses: &[Boss]) -> RaidProgress {
    Difficulty::iter()
        .map(|difficulty| {
            let downed = bosses
                .iter()
                .filter(|boss| boss.kills(difficulty) > 0)
                .count();
            let kills = BossKills {
                downed,
                total: bosses.len(),
            };
            (difficulty, kills)
        })
        .collect()
}

/// Fetch a character profile with its items and raid progression.
///
/// Progress is only reported for the raids in
/// [`FetchOptions::progress_raids`], with one entry per difficulty.
///
/// # Errors
///
/// - [`ErrorKind::UnresolvedId`](crate::ErrorKind::UnresolvedId) if the
///   class or race id is missing from `regional_info`,
/// - [`ErrorKind::Decode`](crate::ErrorKind::Decode) if the profile does not
///   have the expected shape,
/// - any error of [`ApiClient::get`].
pub async fn fetch_character(
    client: &ApiClient,
    region: &str,
    realm: &str,
    name: &str,
    regional_info: &RegionalInfo,
    options: &FetchOptions,
) -> Result<Character> {
    let path = format!("/wow/character/{}/{}", segment(realm), segment(name));
    let response = client
        .get(&path, &[("fields", "items,progression")], region)
        .await?;
    let profile: CharacterResponse = decode(response, || {
        format!("profile of character {name}-{realm} ({region})")
    })?;

    let class = regional_info.class(profile.class)?.to_string();
    let race = regional_info.race(profile.race)?.to_string();

    let progress: BTreeMap<_, _> = profile
        .progression
        .raids
        .iter()
        .filter(|raid| options.tracks_raid(&raid.name))
        .map(|raid| (raid.name.clone(), raid_progress(&raid.bosses)))
        .collect();

    Ok(Character {
        region: region.to_string(),
        realm: realm.to_string(),
        name: name.to_string(),
        class,
        race,
        level: profile.level,
        item_level: profile.items.average_item_level,
        progress,
    })
}

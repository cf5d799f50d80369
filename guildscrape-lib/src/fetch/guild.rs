use log::info;
use serde::Deserialize;

use super::{decode, fan_out, fetch_character, segment};
use crate::{ApiClient, ErrorKind, FetchOptions, Guild, RegionalInfo, Result};

#[derive(Debug, Deserialize)]
struct GuildResponse {
    members: Vec<Member>,
}

#[derive(Debug, Deserialize)]
struct Member {
    character: MemberCharacter,
}

#[derive(Debug, Deserialize)]
struct MemberCharacter {
    name: String,
    level: u32,
}

/// Fetch a guild roster and the profile of every member at or above
/// [`FetchOptions::min_level`].
///
/// Member profiles are fetched concurrently with [`fan_out`]; they all wait
/// on the request quota of `client`.
///
/// # Errors
///
/// - [`ErrorKind::Decode`] if the roster does not have the expected shape,
/// - [`ErrorKind::Character`] wrapping the error of the first member that
///   could not be fetched; no partial guild is returned in that case,
/// - any error of [`ApiClient::get`].
pub async fn fetch_guild(
    client: &ApiClient,
    region: &str,
    realm: &str,
    name: &str,
    regional_info: &RegionalInfo,
    options: &FetchOptions,
) -> Result<Guild> {
    let path = format!("/wow/guild/{}/{}", segment(realm), segment(name));
    let response = client.get(&path, &[("fields", "members")], region).await?;
    let roster: GuildResponse = decode(response, || {
        format!("member list of guild {name}-{realm} ({region})")
    })?;

    let mate_names: Vec<String> = roster
        .members
        .into_iter()
        .map(|member| member.character)
        .filter(|member| {
            let eligible = options.is_eligible(member.level);
            if !eligible {
                info!(
                    "    ... Skipping {}-{realm}, level {} < minimum {}",
                    member.name, member.level, options.min_level
                );
            }
            eligible
        })
        .map(|member| member.name)
        .collect();

    let mates = fan_out(mate_names, |mate| async move {
        let character = fetch_character(client, region, realm, &mate, regional_info, options)
            .await
            .map_err(|source| ErrorKind::Character {
                region: region.to_string(),
                realm: realm.to_string(),
                name: mate.clone(),
                source: Box::new(source),
            })?;
        info!("    ... {mate}-{realm}");
        Ok(character)
    })
    .await?;

    Ok(Guild {
        region: region.to_string(),
        realm: realm.to_string(),
        name: name.to_string(),
        mates,
    })
}

//! Writing guild files and the published configuration to the output
//! directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use guildscrape_lib::{Guild, normalize_name};
use serde::Serialize;

use crate::options::{GuildEntry, Settings};

/// Name of the published configuration inside the output directory
pub(crate) const PUBLISHED_CONFIG_FILE: &str = "config.json";

/// Location of a guild file, relative to the output directory.
///
/// Always uses `/` as separator so that it can be published as is.
pub(crate) fn guild_file(region: &str, realm: &str, name: &str) -> String {
    format!(
        "{}/{}/{}.json",
        normalize_name(region),
        normalize_name(realm),
        normalize_name(name)
    )
}

/// Write `contents` to `outdir/relative`, creating missing directories
fn write_file(outdir: &Path, relative: &str, contents: &[u8]) -> Result<PathBuf> {
    let path = outdir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory `{}`", parent.display()))?;
    }
    fs::write(&path, contents).with_context(|| format!("Cannot write `{}`", path.display()))?;
    Ok(path)
}

/// Serialize a fetched guild and write it to its file below `outdir`
pub(crate) fn write_guild(outdir: &Path, entry: &GuildEntry, guild: &Guild) -> Result<PathBuf> {
    let json = serde_json::to_vec(guild)?;
    write_file(
        outdir,
        &guild_file(&entry.region, &entry.realm, &entry.name),
        &json,
    )
}

/// A configured guild and the location of its file
#[derive(Debug, Serialize)]
struct PublishedGuild<'a> {
    #[serde(flatten)]
    entry: &'a GuildEntry,
    path: String,
}

/// The configuration of a run, without credentials or endpoints
#[derive(Debug, Serialize)]
struct PublishedConfig<'a> {
    api_qps_limit: u32,
    min_level: u32,
    progress_raids: &'a [String],
    guilds: Vec<PublishedGuild<'a>>,
}

impl<'a> From<&'a Settings> for PublishedConfig<'a> {
    fn from(settings: &'a Settings) -> Self {
        Self {
            api_qps_limit: settings.qps_limit,
            min_level: settings.min_level,
            progress_raids: &settings.progress_raids,
            guilds: settings
                .guilds
                .iter()
                .map(|entry| PublishedGuild {
                    entry,
                    path: guild_file(&entry.region, &entry.realm, &entry.name),
                })
                .collect(),
        }
    }
}

/// Write the published configuration to `outdir/config.json`
pub(crate) fn write_config(outdir: &Path, settings: &Settings) -> Result<PathBuf> {
    let json = serde_json::to_vec_pretty(&PublishedConfig::from(settings))?;
    write_file(outdir, PUBLISHED_CONFIG_FILE, &json)
}

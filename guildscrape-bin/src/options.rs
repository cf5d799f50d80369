use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use guildscrape_lib::{ClientBuilder, DEFAULT_USER_AGENT, FetchOptions, Region};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::verbosity::Verbosity;

pub(crate) const DEFAULT_CONFIG_FILE: &str = "config.yml";
pub(crate) const DEFAULT_OUTDIR: &str = "build";

/// guildscrape fetches the roster of WoW guilds and the raid progress of
/// every member, and writes one JSON file per guild.
///
/// All requests share one per-second quota (`api_qps_limit`).
#[derive(Parser, Debug)]
#[command(version, about)]
pub(crate) struct GuildScrapeOptions {
    /// Configuration file to use (YAML, or TOML with a `.toml` extension)
    #[arg(short, long = "config", default_value = DEFAULT_CONFIG_FILE)]
    pub(crate) config_file: PathBuf,

    /// Directory to write the guild files and the published configuration to
    #[arg(short, long, default_value = DEFAULT_OUTDIR)]
    pub(crate) outdir: PathBuf,

    /// API key, takes precedence over `api_key` in the configuration file
    #[arg(long, env = "GUILDSCRAPE_API_KEY", hide_env_values = true)]
    pub(crate) api_key: Option<SecretString>,

    /// Maximum number of API requests per second, takes precedence over
    /// `api_qps_limit` in the configuration file
    #[arg(long, value_name = "N")]
    pub(crate) qps_limit: Option<u32>,

    #[command(flatten)]
    pub(crate) verbose: Verbosity,
}

/// A guild to fetch, as listed in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct GuildEntry {
    pub(crate) region: String,
    pub(crate) realm: String,
    pub(crate) name: String,
}

/// Contents of the configuration file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) api_key: Option<SecretString>,
    #[serde(default)]
    pub(crate) api_qps_limit: Option<u32>,
    #[serde(default)]
    pub(crate) min_level: u32,
    #[serde(default)]
    pub(crate) progress_raids: Vec<String>,
    #[serde(default)]
    pub(crate) guilds: Vec<GuildEntry>,
    /// Base URLs replacing the default endpoint of some regions
    #[serde(default)]
    pub(crate) endpoints: HashMap<String, Url>,
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    ///
    /// Files ending in `.toml` are parsed as TOML, anything else as YAML.
    pub(crate) fn load_from_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&contents).context("Failed to parse TOML configuration file")
        } else {
            serde_yaml::from_str(&contents).context("Failed to parse YAML configuration file")
        }
    }

    /// Merge command-line overrides into the file configuration and check
    /// that every required value is present.
    pub(crate) fn into_settings(self, opts: &GuildScrapeOptions) -> Result<Settings> {
        let api_key = opts
            .api_key
            .clone()
            .or(self.api_key)
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or_else(|| {
                anyhow!("No API key given, set `api_key` or pass `--api-key`")
            })?;

        let qps_limit = opts.qps_limit.or(self.api_qps_limit).ok_or_else(|| {
            anyhow!("No request quota given, set `api_qps_limit` or pass `--qps-limit`")
        })?;
        if qps_limit == 0 {
            bail!("`api_qps_limit` must be at least 1");
        }

        let endpoints = self
            .endpoints
            .into_iter()
            .map(|(region, url)| {
                let region: Region = region
                    .parse()
                    .with_context(|| format!("Invalid endpoint override for `{region}`"))?;
                Ok((region, url))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        for guild in &self.guilds {
            guild
                .region
                .parse::<Region>()
                .with_context(|| format!("Invalid region for guild `{}`", guild.name))?;
        }

        Ok(Settings {
            api_key,
            qps_limit,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            endpoints,
            min_level: self.min_level,
            progress_raids: self.progress_raids,
            guilds: self.guilds,
        })
    }
}

/// Validated configuration of a run
#[derive(Debug)]
pub(crate) struct Settings {
    api_key: SecretString,
    pub(crate) qps_limit: u32,
    user_agent: String,
    endpoints: HashMap<Region, Url>,
    pub(crate) min_level: u32,
    /// Tracked raids, in configuration order
    pub(crate) progress_raids: Vec<String>,
    pub(crate) guilds: Vec<GuildEntry>,
}

impl Settings {
    /// Build the client every request of the run goes through
    pub(crate) fn client_builder(&self) -> ClientBuilder {
        ClientBuilder::builder()
            .api_key(self.api_key.clone())
            .qps_limit(self.qps_limit)
            .user_agent(self.user_agent.clone())
            .endpoints(self.endpoints.clone())
            .build()
    }

    pub(crate) fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            min_level: self.min_level,
            progress_raids: self.progress_raids.iter().cloned().collect::<HashSet<_>>(),
        }
    }
}

//! `guildscrape` fetches the rosters of the guilds listed in its
//! configuration file, together with the level, class, race, item level and
//! raid progress of every member, and writes one JSON file per guild.
//!
//! The binary is a thin wrapper around guildscrape-lib. All requests of a run
//! share one quota of `api_qps_limit` requests per second.
//!
//! Run it next to a `config.yml`:
//! ```sh
//! guildscrape
//! ```
//!
//! Use another configuration file and output directory:
//! ```sh
//! guildscrape --config guilds.toml --outdir public/data
//! ```
//!
//! Keep the API key out of the configuration file:
//! ```sh
//! GUILDSCRAPE_API_KEY=... guildscrape
//! ```
#![warn(clippy::all, clippy::pedantic)]
#![warn(
    absolute_paths_not_starting_with_crate,
    rustdoc::invalid_html_tags,
    missing_copy_implementations,
    missing_debug_implementations,
    semicolon_in_expressions_from_macros,
    unreachable_pub,
    unused_extern_crates,
    variant_size_differences
)]
#![deny(anonymous_parameters, macro_use_extern_crate)]
#![deny(missing_docs)]

use anyhow::{Context, Result, bail};
use clap::Parser;
use guildscrape_lib::{fetch, normalize_name};
use log::{error, info};

use crate::logging::init_logging;
use crate::options::{Config, GuildScrapeOptions, Settings};

mod logging;
mod options;
mod output;
mod verbosity;

/// A C-like enum that can be cast to `i32` and used as process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitCode {
    Success = 0,
    UnexpectedFailure = 1,
    ConfigFile = 3,
}

fn main() -> Result<()> {
    // std::process::exit doesn't run destructors, so the actual work
    // happens in `run_main`.
    let exit_code = run_main()?;
    std::process::exit(exit_code);
}

/// Merge the configuration file with the command-line options
fn load_config(opts: &GuildScrapeOptions) -> Result<Settings> {
    let config = match Config::load_from_file(&opts.config_file) {
        Ok(config) => config,
        Err(e) => bail!(
            "Cannot load configuration file `{}`: {e:?}",
            opts.config_file.display()
        ),
    };
    config.into_settings(opts)
}

/// Set up runtime and call the guildscrape entrypoint
fn run_main() -> Result<i32> {
    let opts = GuildScrapeOptions::parse();
    init_logging(&opts.verbose);

    let settings = match load_config(&opts) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Error while loading config: {e:#}");
            return Ok(ExitCode::ConfigFile as i32);
        }
    };

    let runtime = tokio::runtime::Runtime::new()?;
    match runtime.block_on(run(&opts, &settings)) {
        Ok(()) => Ok(ExitCode::Success as i32),
        Err(e) => {
            error!("{e:#}");
            Ok(ExitCode::UnexpectedFailure as i32)
        }
    }
}

/// Fetch every configured guild and write the output directory
async fn run(opts: &GuildScrapeOptions, settings: &Settings) -> Result<()> {
    let client = settings.client_builder().client()?;
    let fetch_options = settings.fetch_options();

    info!("Loading regional info...");
    let regional_infos = fetch::fetch_regional_infos(
        &client,
        settings.guilds.iter().map(|guild| guild.region.as_str()),
    )
    .await
    .context("Cannot fetch regional info")?;

    info!("Loading guild info...");
    for entry in &settings.guilds {
        let region = normalize_name(&entry.region);
        let regional_info = regional_infos
            .get(&region)
            .with_context(|| format!("No regional info for `{region}`"))?;

        info!("  ... {}-{} ({region})", entry.name, entry.realm);
        let guild = fetch::fetch_guild(
            &client,
            &region,
            &entry.realm,
            &entry.name,
            regional_info,
            &fetch_options,
        )
        .await
        .with_context(|| {
            format!(
                "Cannot fetch guild {}-{} ({region})",
                entry.name, entry.realm
            )
        })?;

        let path = output::write_guild(&opts.outdir, entry, &guild)?;
        info!(
            "  ... wrote {} member(s) to `{}`",
            guild.mates.len(),
            path.display()
        );
    }

    output::write_config(&opts.outdir, settings)?;
    info!("Done!");
    Ok(())
}

//! `guildscrape` fetches guild rosters and the raid progress of every guild
//! member from the WoW community API, without ever exceeding the request
//! quota granted to an API key.
//!
//! All requests go through a single [`ApiClient`], which owns the
//! [`QuotaLimiter`]. Member lookups of a guild run concurrently, but every one
//! of them waits for a slot in the same per-second window.
//!
//! ```no_run
//! use std::collections::HashSet;
//!
//! use guildscrape_lib::{ClientBuilder, FetchOptions, Result, fetch};
//! use secrecy::SecretString;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ClientBuilder::builder()
//!         .api_key(SecretString::from("my-api-key".to_string()))
//!         .qps_limit(100u32)
//!         .build()
//!         .client()?;
//!
//!     let options = FetchOptions {
//!         min_level: 110,
//!         progress_raids: HashSet::from(["Antorus, the Burning Throne".to_string()]),
//!     };
//!
//!     let regional_info = fetch::fetch_regional_info(&client, "eu").await?;
//!     let guild = fetch::fetch_guild(
//!         &client,
//!         "eu",
//!         "Stormrage",
//!         "Method",
//!         &regional_info,
//!         &options,
//!     )
//!     .await?;
//!     println!("{} members", guild.mates.len());
//!     Ok(())
//! }
//! ```
#![warn(clippy::all, clippy::pedantic)]
#![warn(
    absolute_paths_not_starting_with_crate,
    rustdoc::invalid_html_tags,
    missing_debug_implementations,
    semicolon_in_expressions_from_macros,
    unreachable_pub,
    unused_extern_crates
)]
#![deny(anonymous_parameters, macro_use_extern_crate)]
#![deny(missing_docs)]

mod client;
mod quota;
mod region;
mod types;

pub mod fetch;

#[cfg(test)]
pub(crate) mod test_utils;

pub use client::{ApiClient, ClientBuilder, DEFAULT_QPS_LIMIT, DEFAULT_USER_AGENT};
pub use quota::QuotaLimiter;
pub use region::{Region, normalize_name};
pub use types::*;

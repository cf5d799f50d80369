//! Fetchers turning API responses into typed records.
//!
//! Every fetcher is a stateless async function taking the shared
//! [`ApiClient`](crate::ApiClient). All remote calls go through
//! [`ApiClient::get`](crate::ApiClient::get), so all of them count against
//! the same request quota.

mod character;
mod fan_out;
mod guild;
mod regional;

pub use character::fetch_character;
pub use fan_out::fan_out;
pub use guild::fetch_guild;
pub use regional::{fetch_regional_info, fetch_regional_infos};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ErrorKind, Result};

/// Characters escaped in realm, guild and character names used as path
/// segments
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode a name for use as a single URL path segment
fn segment(name: &str) -> String {
    utf8_percent_encode(name, PATH_SEGMENT).to_string()
}

/// Deserialize a JSON response into its expected shape
fn decode<T, F>(value: Value, what: F) -> Result<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> String,
{
    serde_json::from_value(value).map_err(|source| ErrorKind::Decode {
        what: what(),
        source,
    })
}

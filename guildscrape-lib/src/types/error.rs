use reqwest::header::InvalidHeaderValue;
use thiserror::Error;
use url::Url;

use super::IdKind;

/// Possible errors when fetching data with `guildscrape_lib`
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The request could not be sent or its body could not be read
    #[error("Network error while requesting `{url}`")]
    Transport {
        /// The requested URL, without the API key
        url: Url,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },
    /// The response body is not JSON or does not have the expected shape
    #[error("Cannot decode {what}")]
    Decode {
        /// Human readable description of the decoded payload
        what: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
    /// There is no known API endpoint for the given region
    #[error("Unsupported region `{0}`")]
    UnsupportedRegion(String),
    /// A class or race id has no entry in the regional lookup tables.
    ///
    /// This means the regional info is stale or belongs to another region.
    #[error("Unknown {kind} id {id} in regional info")]
    UnresolvedId {
        /// Whether a class or a race id was looked up
        kind: IdKind,
        /// The id that could not be resolved
        id: u32,
    },
    /// The request quota must allow at least one request per second
    #[error("Invalid API QPS limit {0}, must be at least 1")]
    InvalidQpsLimit(u32),
    /// No API key was given to the client builder
    #[error("No API key specified")]
    MissingApiKey,
    /// The user agent cannot be sent as a header value
    #[error("Invalid user agent header")]
    InvalidHeader(#[from] InvalidHeaderValue),
    /// An endpoint URL or a request URL derived from it cannot be parsed
    #[error("Invalid URL `{0}`")]
    InvalidUrl(String, #[source] url::ParseError),
    /// The underlying HTTP client cannot be built
    #[error("Cannot build HTTP client")]
    BuildClient(#[source] reqwest::Error),
    /// Fetching a guild member failed
    #[error("Cannot fetch character {name}-{realm} ({region})")]
    Character {
        /// Region of the character
        region: String,
        /// Realm of the character
        realm: String,
        /// Name of the character
        name: String,
        /// The error that aborted the fetch
        #[source]
        source: Box<ErrorKind>,
    },
}

impl ErrorKind {
    /// Returns the innermost error, unwrapping entity context.
    #[must_use]
    pub fn root(&self) -> &ErrorKind {
        match self {
            Self::Character { source, .. } => source.root(),
            other => other,
        }
    }
}

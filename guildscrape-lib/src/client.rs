//! Rate-limited access to the community API.
//!
//! This module defines two structs, [`ApiClient`] and [`ClientBuilder`].
//! `ApiClient` issues requests and decodes their JSON bodies.
//! `ClientBuilder` exposes the knobs used to build an `ApiClient`.
#![allow(clippy::module_name_repetitions)]
use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use reqwest::header::{self, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use typed_builder::TypedBuilder;
use url::Url;

use crate::{ErrorKind, QuotaLimiter, Region, Result};

/// Default request quota, the per-second limit of a standard API key.
pub const DEFAULT_QPS_LIMIT: u32 = 100;
/// Default user agent, `guildscrape/<PKG_VERSION>`.
pub const DEFAULT_USER_AGENT: &str = concat!("guildscrape/", env!("CARGO_PKG_VERSION"));

/// Builder for [`ApiClient`].
///
/// See crate-level documentation for a usage example.
#[derive(TypedBuilder, Debug)]
#[builder(field_defaults(default, setter(into)))]
pub struct ClientBuilder {
    /// API key sent with every request as the `apikey` query parameter.
    api_key: Option<SecretString>,
    /// Maximum number of requests per second, shared by every request made
    /// through the client.
    #[builder(default = DEFAULT_QPS_LIMIT)]
    qps_limit: u32,
    /// User-agent sent with every request.
    #[builder(default_code = "String::from(DEFAULT_USER_AGENT)")]
    user_agent: String,
    /// Base URLs replacing the default endpoint of some regions.
    endpoints: HashMap<Region, Url>,
}

impl ClientBuilder {
    /// Instantiates an [`ApiClient`].
    ///
    /// # Errors
    ///
    /// Returns an `Err` if:
    /// - no API key was given,
    /// - the QPS limit is zero,
    /// - the user-agent is not a valid header value,
    /// - the request client cannot be created.
    pub fn client(self) -> Result<ApiClient> {
        let Self {
            api_key,
            qps_limit,
            user_agent,
            mut endpoints,
        } = self;

        let api_key = api_key
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or(ErrorKind::MissingApiKey)?;
        let limiter = Arc::new(QuotaLimiter::new(qps_limit)?);

        for region in Region::ALL {
            if !endpoints.contains_key(&region) {
                let base = region.default_base_url();
                let url = Url::parse(base)
                    .map_err(|e| ErrorKind::InvalidUrl(base.to_string(), e))?;
                endpoints.insert(region, url);
            }
        }

        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_str(&user_agent)?);

        let reqwest_client = reqwest::ClientBuilder::new()
            .gzip(true)
            .default_headers(headers)
            .build()
            .map_err(ErrorKind::BuildClient)?;

        Ok(ApiClient {
            reqwest_client,
            api_key,
            endpoints,
            limiter,
        })
    }
}

/// Issues API requests, one quota slot per request.
///
/// See [`ClientBuilder`] for the available configuration. Clones share the
/// same request quota and connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Underlying `reqwest` client instance that handles the HTTP requests.
    reqwest_client: reqwest::Client,
    api_key: SecretString,
    /// Base URL of every supported region.
    endpoints: HashMap<Region, Url>,
    limiter: Arc<QuotaLimiter>,
}

impl ApiClient {
    /// Fetch `path` from the endpoint of `region` and parse the body as JSON.
    ///
    /// `path` is appended verbatim to the base URL, so its segments must
    /// already be percent-encoded. The API key is added to `params`.
    ///
    /// Waits on the request quota before sending the request.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::UnsupportedRegion`] if `region` has no endpoint; no
    ///   quota is consumed in that case,
    /// - [`ErrorKind::Transport`] if the request fails,
    /// - [`ErrorKind::Decode`] if the body is not valid JSON.
    pub async fn get(&self, path: &str, params: &[(&str, &str)], region: &str) -> Result<Value> {
        let url = self.url_for(path, region)?;

        self.limiter.acquire().await;
        debug!("GET {url}");

        let response = self
            .reqwest_client
            .get(url.clone())
            .query(&[("apikey", self.api_key.expose_secret())])
            .query(params)
            .send()
            .await
            .map_err(|source| ErrorKind::Transport {
                url: url.clone(),
                source,
            })?;
        let body = response
            .bytes()
            .await
            .map_err(|source| ErrorKind::Transport {
                url: url.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| ErrorKind::Decode {
            what: format!("response body of `{url}`"),
            source,
        })
    }

    /// The limiter every request of this client waits on
    #[must_use]
    pub fn limiter(&self) -> &QuotaLimiter {
        &self.limiter
    }

    fn url_for(&self, path: &str, region: &str) -> Result<Url> {
        let region: Region = region.parse()?;
        // `ClientBuilder::client` fills in every region without an override
        let base = &self.endpoints[&region];

        let raw = format!("{}{path}", base.as_str().trim_end_matches('/'));
        Url::parse(&raw).map_err(|e| ErrorKind::InvalidUrl(raw, e))
    }
}

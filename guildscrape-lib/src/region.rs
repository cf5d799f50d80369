use std::str::FromStr;

use strum::{AsRefStr, Display};

use crate::ErrorKind;

/// Normalizes a region, realm or guild name, e.g. for embedding in URLs or
/// file paths.
///
/// ```
/// use guildscrape_lib::normalize_name;
///
/// assert_eq!(normalize_name("Stormrage EU"), "stormrage-eu");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// API regions with a known endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Region {
    /// Europe
    Eu,
    /// Americas, also accepted as `na`
    Us,
    /// Korea
    Kr,
    /// Taiwan
    Tw,
    /// China, served by the Taiwan endpoint
    Cn,
}

impl Region {
    /// All supported regions
    pub const ALL: [Region; 5] = [Region::Eu, Region::Us, Region::Kr, Region::Tw, Region::Cn];

    /// Base URL of the public API endpoint serving this region
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Region::Eu => "https://eu.api.battle.net/",
            Region::Us => "https://us.api.battle.net/",
            Region::Kr => "https://kr.api.battle.net/",
            // There is no public endpoint for `cn`
            Region::Tw | Region::Cn => "https://tw.api.battle.net/",
        }
    }
}

impl FromStr for Region {
    type Err = ErrorKind;

    fn from_str(region: &str) -> Result<Self, Self::Err> {
        match normalize_name(region).as_str() {
            "eu" => Ok(Region::Eu),
            "na" | "us" => Ok(Region::Us),
            "kr" => Ok(Region::Kr),
            "tw" => Ok(Region::Tw),
            "cn" => Ok(Region::Cn),
            _ => Err(ErrorKind::UnsupportedRegion(region.to_string())),
        }
    }
}

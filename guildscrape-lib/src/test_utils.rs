use std::collections::HashMap;

use secrecy::SecretString;
use url::Url;
use wiremock::MockServer;

use crate::{ApiClient, ClientBuilder, Region, RegionalInfo};

/// API key expected by the mock servers
pub(crate) const MOCK_API_KEY: &str = "secret";

/// Create a client sending every region's requests to the given mock server
///
/// # Panic
///
/// This panics on error, so it should only be used for testing
pub(crate) fn mock_client(mock_server: &MockServer, qps_limit: u32) -> ApiClient {
    let url = Url::parse(&mock_server.uri()).expect("Expected valid mock server URL");
    let endpoints: HashMap<Region, Url> = Region::ALL
        .into_iter()
        .map(|region| (region, url.clone()))
        .collect();

    ClientBuilder::builder()
        .api_key(SecretString::from(MOCK_API_KEY.to_string()))
        .qps_limit(qps_limit)
        .endpoints(endpoints)
        .build()
        .client()
        .expect("Expected valid mock client")
}

/// Regional info matching the tables served by `test_utils::mock_regional_endpoints!`
pub(crate) fn regional_info() -> RegionalInfo {
    RegionalInfo::new(
        HashMap::from([
            (1, "Human".to_string()),
            (2, "Orc".to_string()),
            (4, "Night Elf".to_string()),
        ]),
        HashMap::from([
            (1, "Warrior".to_string()),
            (5, "Priest".to_string()),
            (8, "Mage".to_string()),
        ]),
    )
}

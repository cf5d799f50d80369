//! `test-utils` is used for testing in both `guildscrape-lib` and `guildscrape-bin`.
//! This crate does not depend on `guildscrape-lib` or `guildscrape-bin`, else we would get dependency cycles.
//! Macros are used instead, so that the importer is responsible for providing the dependencies
//! (`wiremock` and `serde_json`).

/// Mount a route on a mock server which answers `GET $path` with the given
/// JSON body
#[macro_export]
macro_rules! mock_json {
    ($server:expr, $path:expr, $body:expr $(,)?) => {{
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path($path))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json($body))
            .mount(&$server)
            .await;
    }};
}

/// Mount the race and class list endpoints on a mock server.
///
/// Races: 1 Human, 2 Orc, 4 Night Elf.
/// Classes: 1 Warrior, 5 Priest, 8 Mage.
#[macro_export]
macro_rules! mock_regional_endpoints {
    ($server:expr) => {{
        $crate::mock_json!(
            $server,
            "/wow/data/character/races",
            serde_json::json!({
                "races": [
                    {"id": 1, "mask": 1, "side": "alliance", "name": "Human"},
                    {"id": 2, "mask": 2, "side": "horde", "name": "Orc"},
                    {"id": 4, "mask": 8, "side": "alliance", "name": "Night Elf"},
                ]
            })
        );
        $crate::mock_json!(
            $server,
            "/wow/data/character/classes",
            serde_json::json!({
                "classes": [
                    {"id": 1, "mask": 1, "powerType": "rage", "name": "Warrior"},
                    {"id": 5, "mask": 16, "powerType": "mana", "name": "Priest"},
                    {"id": 8, "mask": 128, "powerType": "mana", "name": "Mage"},
                ]
            })
        );
    }};
}

/// Build the JSON body of a character profile with `items` and
/// `progression` fields.
///
/// `$raids` is a list of `(raid name, [(normal, heroic, mythic) kills per boss])`.
#[macro_export]
macro_rules! character_json {
    ($name:expr, $level:expr, $class:expr, $race:expr, $ilvl:expr, [$(($raid:expr, [$(($n:expr, $h:expr, $m:expr)),* $(,)?])),* $(,)?] $(,)?) => {
        serde_json::json!({
            "name": $name,
            "level": $level,
            "class": $class,
            "race": $race,
            "items": {"averageItemLevel": $ilvl, "averageItemLevelEquipped": $ilvl},
            "progression": {
                "raids": [
                    $({
                        "name": $raid,
                        "bosses": [
                            $({"normalKills": $n, "heroicKills": $h, "mythicKills": $m}),*
                        ]
                    }),*
                ]
            }
        })
    };
}

/// Build the JSON body of a guild roster with `(name, level)` members
#[macro_export]
macro_rules! guild_json {
    ($name:expr, [$(($member:expr, $level:expr)),* $(,)?] $(,)?) => {
        serde_json::json!({
            "name": $name,
            "members": [
                $({"character": {"name": $member, "level": $level}, "rank": 0}),*
            ]
        })
    };
}

use std::collections::HashMap;

use serde::Serialize;

use super::Character;

/// A guild and the characters of all its members at or above the minimum
/// level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guild {
    /// Normalized region of the guild
    pub region: String,
    /// Realm of the guild
    pub realm: String,
    /// Guild name
    pub name: String,
    /// Guild members, keyed by character name
    pub mates: HashMap<String, Character>,
}

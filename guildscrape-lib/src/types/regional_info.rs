use std::collections::HashMap;

use strum::Display;

use crate::{ErrorKind, Result};

/// The kind of numeric id resolved through [`RegionalInfo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum IdKind {
    /// Character class id
    Class,
    /// Character race id
    Race,
}

/// Per-region lookup tables mapping class and race ids to display names.
///
/// Built once per region and only read afterwards, so a single instance can
/// be shared by reference between all concurrent character fetches of that
/// region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionalInfo {
    races: HashMap<u32, String>,
    classes: HashMap<u32, String>,
}

impl RegionalInfo {
    /// Create regional info from pre-existing lookup tables.
    ///
    /// See [`crate::fetch::fetch_regional_info`] to fetch them from the API.
    #[must_use]
    pub const fn new(races: HashMap<u32, String>, classes: HashMap<u32, String>) -> Self {
        Self { races, classes }
    }

    /// Name of the race with the given id
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnresolvedId`] if the id is unknown.
    pub fn race(&self, id: u32) -> Result<&str> {
        Self::lookup(&self.races, IdKind::Race, id)
    }

    /// Name of the class with the given id
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnresolvedId`] if the id is unknown.
    pub fn class(&self, id: u32) -> Result<&str> {
        Self::lookup(&self.classes, IdKind::Class, id)
    }

    fn lookup(table: &HashMap<u32, String>, kind: IdKind, id: u32) -> Result<&str> {
        table
            .get(&id)
            .map(String::as_str)
            .ok_or(ErrorKind::UnresolvedId { kind, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let info = RegionalInfo::new(
            HashMap::from([(1, "Human".to_string())]),
            HashMap::from([(8, "Mage".to_string())]),
        );

        assert_eq!(info.race(1).unwrap(), "Human");
        assert_eq!(info.class(8).unwrap(), "Mage");
        assert!(matches!(
            info.class(7),
            Err(ErrorKind::UnresolvedId {
                kind: IdKind::Class,
                id: 7
            })
        ));
        assert!(matches!(
            info.race(8),
            Err(ErrorKind::UnresolvedId {
                kind: IdKind::Race,
                id: 8
            })
        ));
    }
}

use std::collections::HashSet;

/// Tuning values shared by the guild and character fetchers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Guild members strictly below this level are skipped
    pub min_level: u32,
    /// Names of the raids to report progress for; other raids are ignored
    pub progress_raids: HashSet<String>,
}

impl FetchOptions {
    /// Whether progress should be reported for the given raid
    #[must_use]
    pub fn tracks_raid(&self, raid: &str) -> bool {
        self.progress_raids.contains(raid)
    }

    /// Whether a guild member of the given level should be fetched
    #[must_use]
    pub const fn is_eligible(&self, level: u32) -> bool {
        level >= self.min_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility_boundary() {
        let options = FetchOptions {
            min_level: 110,
            ..FetchOptions::default()
        };
        assert!(!options.is_eligible(109));
        assert!(options.is_eligible(110));
        assert!(options.is_eligible(120));
    }
}

use serde::{Deserialize, Serialize};

/// Dimension filters for pathway queries. An empty set leaves that
/// dimension unfiltered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathwayFilter {
    pub trusts: Vec<String>,
    pub directories: Vec<String>,
    pub drugs: Vec<String>,
}

impl PathwayFilter {
    pub fn is_empty(&self) -> bool {
        self.trusts.is_empty() && self.directories.is_empty() && self.drugs.is_empty()
    }

    /// Ancestor pruning is only worthwhile when a filter below trust
    /// level is active; trust-only filtering cannot orphan anything.
    pub fn needs_pruning(&self) -> bool {
        !self.directories.is_empty() || !self.drugs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_needs_no_pruning() {
        let filter = PathwayFilter::default();
        assert!(filter.is_empty());
        assert!(!filter.needs_pruning());
    }

    #[test]
    fn trust_only_filter_needs_no_pruning() {
        let filter = PathwayFilter {
            trusts: vec!["TRUST1".into()],
            ..Default::default()
        };
        assert!(!filter.is_empty());
        assert!(!filter.needs_pruning());
    }

    #[test]
    fn drug_filter_needs_pruning() {
        let filter = PathwayFilter {
            drugs: vec!["ETA".into()],
            ..Default::default()
        };
        assert!(filter.needs_pruning());
    }
}

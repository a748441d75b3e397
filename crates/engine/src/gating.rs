use serde::{Deserialize, Serialize};

/// Tag-prefix lists that gate whether a document is synchronized at all.
///
/// Prefix matching is plain `starts_with` on the tag string, not anchored to
/// a `/` boundary: `block = ["no"]` matches both `no-sync` and `note`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatingConfig {
    /// At least one current tag must start with one of these for
    /// synchronization to proceed. Empty means no requirement.
    #[serde(default)]
    pub require: Vec<String>,

    /// Any current tag starting with one of these suppresses
    /// synchronization entirely. Checked before `require`.
    #[serde(default)]
    pub block: Vec<String>,
}

impl GatingConfig {
    pub(crate) fn blocks(&self, tags: &[String]) -> bool {
        self.block
            .iter()
            .any(|prefix| tags.iter().any(|tag| tag.starts_with(prefix)))
    }

    pub(crate) fn permits(&self, tags: &[String]) -> bool {
        if self.require.is_empty() {
            return true;
        }
        self.require
            .iter()
            .any(|prefix| tags.iter().any(|tag| tag.starts_with(prefix)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn block_matches_prefix_anywhere_in_segment() {
        let gating = GatingConfig {
            require: vec![],
            block: vec!["no".into()],
        };
        assert!(gating.blocks(&tags(&["note"])));
        assert!(gating.blocks(&tags(&["no-sync"])));
        assert!(!gating.blocks(&tags(&["yes"])));
    }

    #[test]
    fn empty_require_permits_everything() {
        let gating = GatingConfig::default();
        assert!(gating.permits(&tags(&[])));
        assert!(gating.permits(&tags(&["anything"])));
    }

    #[test]
    fn require_needs_one_prefix_match() {
        let gating = GatingConfig {
            require: vec!["source".into()],
            block: vec![],
        };
        assert!(!gating.permits(&tags(&["note"])));
        assert!(gating.permits(&tags(&["source/book"])));
        assert!(gating.permits(&tags(&["source"])));
    }
}

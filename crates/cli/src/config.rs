use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tagsync_engine::{GatingConfig, MappingRule};

/// The full rule configuration for a vault.
///
/// TOML shape: a `[gating]` table plus `[[rule]]` tables, each internally
/// tagged by `strategy`:
///
/// ```toml
/// [gating]
/// require = ["source"]
/// block = ["no-sync"]
///
/// [[rule]]
/// field = "genre"
/// strategy = "direct"
///
/// [[rule]]
/// field = "status"
/// strategy = "enumerated"
/// pairs = [
///     { value = "done", tag = "state/complete" },
///     { value = "wip", tag = "state/active" },
/// ]
///
/// [[rule]]
/// field = "author"
/// strategy = "reference"
/// prefix = "people/"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub gating: GatingConfig,

    #[serde(default, rename = "rule")]
    pub rules: Vec<MappingRule>,
}

/// Default configuration location inside a vault.
pub fn default_config_path(vault: &Path) -> PathBuf {
    vault.join(".tagsync").join("config.toml")
}

pub fn load_config(path: &Path) -> Result<SyncConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagsync_engine::Strategy;

    #[test]
    fn parses_all_three_strategies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[gating]
block = ["no-sync"]

[[rule]]
field = "genre"
strategy = "direct"

[[rule]]
field = "status"
strategy = "enumerated"
pairs = [
    { value = "done", tag = "state/complete" },
]

[[rule]]
field = "author"
strategy = "reference"
prefix = "people/"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.gating.block, vec!["no-sync"]);
        assert!(config.gating.require.is_empty());
        assert_eq!(config.rules.len(), 3);
        assert!(matches!(config.rules[0].strategy, Strategy::Direct));
        assert!(matches!(config.rules[1].strategy, Strategy::Enumerated { .. }));
        assert!(matches!(
            config.rules[2].strategy,
            Strategy::Reference { ref prefix } if prefix == "people/"
        ));
    }

    #[test]
    fn empty_config_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.rules.is_empty());
        assert!(config.gating.require.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.toml"));
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tagsync_engine::RuleState;

use crate::Result;

pub(crate) const STATE_DIR_NAME: &str = ".tagsync";
const STATE_FILE_NAME: &str = "state.json";

/// Persisted per-document rule state for a whole vault, keyed by
/// vault-relative path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VaultState {
    #[serde(default)]
    pub documents: BTreeMap<String, RuleState>,
}

impl VaultState {
    /// State for one document; a document never seen before starts empty.
    pub fn for_document(&self, rel_path: &str) -> RuleState {
        self.documents.get(rel_path).cloned().unwrap_or_default()
    }

    /// Store a document's state after a run. Empty states are dropped so the
    /// file does not accumulate entries for documents with no direct rules.
    pub fn update(&mut self, rel_path: &str, state: RuleState) {
        if state.is_empty() {
            self.documents.remove(rel_path);
        } else {
            self.documents.insert(rel_path.to_string(), state);
        }
    }
}

pub fn state_path(root: &Path) -> PathBuf {
    root.join(STATE_DIR_NAME).join(STATE_FILE_NAME)
}

/// Read the vault's state file; a missing file is an empty state.
pub fn read_state(root: &Path) -> Result<VaultState> {
    let path = state_path(root);
    if !path.exists() {
        return Ok(VaultState::default());
    }
    let bytes = fs::read(&path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Write the vault's state file atomically (temp file + rename).
pub fn write_state(root: &Path, state: &VaultState) -> Result<()> {
    let path = state_path(root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let bytes = serde_json::to_vec_pretty(state)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, &path)?;
    Ok(())
}

use serde::{Deserialize, Serialize};

/// Statistics about one batch synchronization run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncStats {
    /// Markdown files considered.
    pub scanned: usize,

    /// Documents whose tag sequence changed (rewritten, unless dry-run).
    pub changed: usize,

    /// Documents reconciled to an identical tag sequence.
    pub unchanged: usize,

    /// Documents gated off by block/require tags.
    pub skipped: usize,

    /// Documents without a frontmatter block.
    pub no_frontmatter: usize,

    /// Time taken in milliseconds.
    pub time_ms: u64,

    /// Per-document errors encountered (the batch keeps going).
    pub errors: Vec<String>,
}

impl SyncStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    /// Whether the run left every document as it was.
    pub fn is_noop(&self) -> bool {
        self.changed == 0 && self.errors.is_empty()
    }
}

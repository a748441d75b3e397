use std::path::{Path, PathBuf};
use std::time::Instant;

use tagsync_engine::{reconcile, GatingConfig, MappingRule, Reconciled};

use crate::document::Document;
use crate::scanner::VaultScanner;
use crate::state_io::{self, VaultState};
use crate::stats::SyncStats;
use crate::{Result, VaultError};

/// What happened to one document during a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocOutcome {
    Changed,
    Unchanged,
    Skipped,
    NoFrontmatter,
}

/// Batch driver: applies the reconciliation engine across every markdown
/// document in a vault.
pub struct VaultSyncer {
    root: PathBuf,
    rules: Vec<MappingRule>,
    gating: GatingConfig,
    dry_run: bool,
}

impl VaultSyncer {
    pub fn new(
        root: impl AsRef<Path>,
        rules: Vec<MappingRule>,
        gating: GatingConfig,
    ) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(VaultError::InvalidRoot(root.display().to_string()));
        }
        Ok(Self {
            root,
            rules,
            gating,
            dry_run: false,
        })
    }

    /// In dry-run mode nothing is written: documents stay untouched and the
    /// state file is not updated.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Synchronize the whole vault. A document that fails to load or parse
    /// is logged and counted; the rest of the batch still runs.
    pub fn sync(&self) -> Result<SyncStats> {
        let started = Instant::now();
        let files = VaultScanner::new(&self.root).scan();
        let mut vault_state = state_io::read_state(&self.root)?;

        let mut stats = SyncStats::new();
        for path in files {
            stats.scanned += 1;
            match self.sync_document(&path, &mut vault_state) {
                Ok(DocOutcome::Changed) => stats.changed += 1,
                Ok(DocOutcome::Unchanged) => stats.unchanged += 1,
                Ok(DocOutcome::Skipped) => stats.skipped += 1,
                Ok(DocOutcome::NoFrontmatter) => stats.no_frontmatter += 1,
                Err(e) => {
                    log::warn!("Failed to sync {}: {e}", path.display());
                    stats.add_error(format!("{}: {e}", path.display()));
                }
            }
        }

        if !self.dry_run {
            state_io::write_state(&self.root, &vault_state)?;
        }

        stats.time_ms = started.elapsed().as_millis() as u64;
        log::info!(
            "Synced vault {}: {} changed, {} unchanged, {} skipped, {} errors in {}ms",
            self.root.display(),
            stats.changed,
            stats.unchanged,
            stats.skipped,
            stats.errors.len(),
            stats.time_ms
        );
        Ok(stats)
    }

    fn sync_document(&self, path: &Path, vault_state: &mut VaultState) -> Result<DocOutcome> {
        let Some(doc) = Document::load(&self.root, path)? else {
            return Ok(DocOutcome::NoFrontmatter);
        };

        let state = vault_state.for_document(&doc.rel_path);
        let outcome = reconcile(&doc.tags, &doc.metadata, &self.rules, &self.gating, &state);
        let changed = outcome.changes(&doc.tags);

        match outcome {
            Reconciled::Skipped(reason) => {
                log::debug!("{}: skipped ({reason:?})", doc.rel_path);
                Ok(DocOutcome::Skipped)
            }
            Reconciled::Applied { tags, state } => {
                vault_state.update(&doc.rel_path, state);
                if !changed {
                    return Ok(DocOutcome::Unchanged);
                }
                if self.dry_run {
                    log::info!("{}: would update tags (dry run)", doc.rel_path);
                } else {
                    doc.write_with_tags(tags.as_deref())?;
                    log::debug!("{}: tags updated", doc.rel_path);
                }
                Ok(DocOutcome::Changed)
            }
        }
    }
}

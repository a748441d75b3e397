//! # Tagsync Vault
//!
//! Host layer for the reconciliation engine: reads markdown documents out of
//! a vault directory, feeds their frontmatter through the engine, and writes
//! the resulting tag sequence back.
//!
//! ## Pipeline
//!
//! ```text
//! Vault directory
//!     │
//!     ├──> Scanner (.gitignore aware)
//!     │      └─> *.md files
//!     │
//!     ├──> Frontmatter split + YAML parse
//!     │      └─> tags + metadata map
//!     │
//!     ├──> tagsync-engine reconcile (per-document rule state)
//!     │
//!     └──> Changed documents rewritten, state persisted, SyncStats
//! ```
//!
//! Documents without a frontmatter block are skipped. A document that fails
//! to read or parse is logged and counted; the batch never aborts on one bad
//! file.

mod document;
mod error;
mod frontmatter;
mod scanner;
mod state_io;
mod stats;
mod syncer;

pub use document::Document;
pub use error::{Result, VaultError};
pub use frontmatter::{split_frontmatter, Frontmatter};
pub use scanner::VaultScanner;
pub use state_io::{read_state, state_path, write_state, VaultState};
pub use stats::SyncStats;
pub use syncer::{DocOutcome, VaultSyncer};

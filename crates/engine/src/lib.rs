//! # Tagsync Engine
//!
//! Deterministic reconciliation of a document's tags against its metadata.
//!
//! ## Pipeline
//!
//! ```text
//! Current tags + metadata map
//!     │
//!     ├──> Gating (block / require prefixes)
//!     │      └─> Skipped, or
//!     │
//!     ├──> Mapping rules, in configured order
//!     │      ├─ Direct:     retract remembered tag, emit sanitized value
//!     │      ├─ Enumerated: retract lookup-table tags, emit first match
//!     │      └─ Reference:  retract prefixed tags, emit wikilink names
//!     │
//!     └──> Ordered tag sequence (reverse lexicographic)
//!            └─> None when empty (tags attribute omitted, not [])
//! ```
//!
//! The engine is pure: it performs no I/O and mutates none of its inputs.
//! Per-document memory for `Direct` rules travels through [`RuleState`],
//! which callers persist between runs.
//!
//! ## Example
//!
//! ```rust
//! use tagsync_engine::{reconcile, FieldValue, GatingConfig, MappingRule,
//!                      MetadataMap, Reconciled, RuleState, Strategy};
//!
//! let rules = vec![MappingRule {
//!     field: "genre".into(),
//!     strategy: Strategy::Direct,
//! }];
//! let mut metadata = MetadataMap::new();
//! metadata.insert("genre".into(), FieldValue::String("Sci-Fi".into()));
//!
//! let out = reconcile(&[], &metadata, &rules, &GatingConfig::default(), &RuleState::default());
//! match out {
//!     Reconciled::Applied { tags, .. } => assert_eq!(tags, Some(vec!["Sci_Fi".into()])),
//!     Reconciled::Skipped(_) => unreachable!(),
//! }
//! ```

mod engine;
mod gating;
mod reference;
mod rule;
mod sanitize;
mod state;
mod value;

pub use engine::{reconcile, Reconciled, SkipReason};
pub use gating::GatingConfig;
pub use reference::extract_display_name;
pub use rule::{MappingRule, Strategy, ValuePair};
pub use sanitize::{sanitize, sanitize_str};
pub use state::RuleState;
pub use value::{FieldValue, MetadataMap};

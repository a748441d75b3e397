use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::reference::extract_display_name;
use crate::sanitize::{sanitize, sanitize_str};
use crate::state::RuleState;
use crate::value::{FieldValue, MetadataMap};

/// How one metadata field projects into tags.
///
/// Serialized form is internally tagged on `strategy`, so a TOML rule table
/// reads as `field = "status"` / `strategy = "enumerated"` / `pairs = [...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRule {
    /// Metadata field this rule reads.
    pub field: String,

    #[serde(flatten)]
    pub strategy: Strategy,
}

/// The closed set of mapping strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum Strategy {
    /// The field value itself becomes the tag (sanitized). Remembers the
    /// last emitted value per document so it can retract precisely.
    Direct,

    /// Lookup table from field value to tag; first matching pair wins per
    /// field element.
    Enumerated { pairs: Vec<ValuePair> },

    /// The field holds wikilink-style references; each derived display name
    /// becomes `prefix + name`.
    Reference { prefix: String },
}

/// One `(value, tag)` row of an enumerated rule's lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuePair {
    pub value: FieldValue,
    pub tag: String,
}

impl MappingRule {
    /// Apply this rule against the working tag set: retract what a previous
    /// run of this rule could have added, then emit what the current field
    /// value implies.
    ///
    /// Retraction scope differs by strategy. `Enumerated` retracts every tag
    /// its table could ever produce, because the rule has no memory of which
    /// pair matched last. `Direct` retracts only the remembered value and
    /// `Reference` everything under its prefix, since their output space is
    /// either remembered explicitly or scoped by the prefix.
    pub(crate) fn apply(
        &self,
        working: &mut BTreeSet<String>,
        metadata: &MetadataMap,
        state: &mut RuleState,
    ) {
        let value = metadata.get(&self.field);
        match &self.strategy {
            Strategy::Direct => self.apply_direct(working, value, state),
            Strategy::Enumerated { pairs } => Self::apply_enumerated(working, value, pairs),
            Strategy::Reference { prefix } => Self::apply_reference(working, value, prefix),
        }
    }

    fn apply_direct(
        &self,
        working: &mut BTreeSet<String>,
        value: Option<&FieldValue>,
        state: &mut RuleState,
    ) {
        if let Some(last) = state.last_emitted(&self.field) {
            working.remove(&sanitize_str(last));
        }

        match value {
            Some(v) => {
                if !v.is_empty() {
                    for element in v.elements() {
                        working.insert(sanitize(element));
                    }
                }
                // Remembered even when empty, so the next run retracts the
                // matching degenerate tag instead of a stale one.
                state.record(&self.field, Some(v.to_string()));
            }
            None => state.record(&self.field, None),
        }
    }

    fn apply_enumerated(
        working: &mut BTreeSet<String>,
        value: Option<&FieldValue>,
        pairs: &[ValuePair],
    ) {
        for pair in pairs {
            working.remove(&sanitize_str(&pair.tag));
        }

        let Some(value) = value else {
            return;
        };
        for element in value.elements() {
            let element = element.to_string();
            if let Some(pair) = pairs.iter().find(|p| p.value.to_string() == element) {
                working.insert(sanitize_str(&pair.tag));
            }
        }
    }

    fn apply_reference(working: &mut BTreeSet<String>, value: Option<&FieldValue>, prefix: &str) {
        working.retain(|tag| !tag.starts_with(prefix));

        let Some(value) = value else {
            return;
        };
        for element in value.elements() {
            let name = extract_display_name(&element.to_string());
            if name.is_empty() {
                continue;
            }
            working.insert(format!("{prefix}{}", sanitize_str(&name)));
        }
    }
}

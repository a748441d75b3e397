use std::collections::BTreeSet;

use crate::gating::GatingConfig;
use crate::rule::MappingRule;
use crate::state::RuleState;
use crate::value::MetadataMap;

/// Why reconciliation did not run for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A current tag matched a `block` prefix.
    Blocked,
    /// No current tag matched any `require` prefix.
    RequirementNotMet,
}

/// Outcome of one reconciliation call.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciled {
    /// Gating suppressed the run. The document and its rule state must be
    /// left exactly as they were.
    Skipped(SkipReason),

    /// The computed tag sequence and the rule state after this run.
    /// `tags: None` means the tags attribute should be removed entirely
    /// ("no tags" is not an empty list).
    Applied {
        tags: Option<Vec<String>>,
        state: RuleState,
    },
}

impl Reconciled {
    /// Whether applying this outcome would change a document currently
    /// carrying `current_tags`. Order-sensitive, matching the fixed output
    /// ordering, so an unchanged document is a true storage no-op.
    pub fn changes(&self, current_tags: &[String]) -> bool {
        match self {
            Reconciled::Skipped(_) => false,
            Reconciled::Applied { tags, .. } => match tags {
                Some(new) => new.as_slice() != current_tags,
                None => !current_tags.is_empty(),
            },
        }
    }
}

/// Reconcile a document's tags against its metadata.
///
/// Applies the configured rules in order, each retracting what a previous
/// run could have added before emitting what the current value implies —
/// which is what makes repeated reconciliation idempotent regardless of how
/// a field changed in between. Later rules see the working set as already
/// modified by earlier rules.
///
/// The output sequence is sorted by descending lexicographic order of the
/// tag string: a deterministic presentation order, never the iteration
/// order of a set structure.
pub fn reconcile(
    current_tags: &[String],
    metadata: &MetadataMap,
    rules: &[MappingRule],
    gating: &GatingConfig,
    state: &RuleState,
) -> Reconciled {
    if gating.blocks(current_tags) {
        log::debug!("reconcile skipped: block tag present");
        return Reconciled::Skipped(SkipReason::Blocked);
    }
    if !gating.permits(current_tags) {
        log::debug!("reconcile skipped: no required tag present");
        return Reconciled::Skipped(SkipReason::RequirementNotMet);
    }

    let mut working: BTreeSet<String> = current_tags.iter().cloned().collect();
    let mut next_state = state.clone();
    for rule in rules {
        rule.apply(&mut working, metadata, &mut next_state);
    }

    let tags = if working.is_empty() {
        None
    } else {
        let mut ordered: Vec<String> = working.into_iter().collect();
        ordered.sort_by(|a, b| b.cmp(a));
        Some(ordered)
    };

    Reconciled::Applied {
        tags,
        state: next_state,
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-document memory of what each `Direct` rule last emitted.
///
/// Keyed by field name. The engine threads this through [`crate::reconcile`]
/// instead of mutating rule configuration, so rules stay process-wide policy
/// while emission history stays with the document it belongs to. Callers
/// persist one `RuleState` per document between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleState {
    last_emitted: BTreeMap<String, String>,
}

impl RuleState {
    /// The string form of the value last emitted for `field`, if any.
    pub fn last_emitted(&self, field: &str) -> Option<&str> {
        self.last_emitted.get(field).map(String::as_str)
    }

    /// Record the value just synchronized for `field`. `None` clears the
    /// entry (the field was absent), so the next run has nothing to retract.
    pub fn record(&mut self, field: &str, value: Option<String>) {
        match value {
            Some(v) => {
                self.last_emitted.insert(field.to_string(), v);
            }
            None => {
                self.last_emitted.remove(field);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.last_emitted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn record_and_clear() {
        let mut state = RuleState::default();
        state.record("priority", Some("urgent".into()));
        assert_eq!(state.last_emitted("priority"), Some("urgent"));

        state.record("priority", None);
        assert_eq!(state.last_emitted("priority"), None);
        assert!(state.is_empty());
    }

    #[test]
    fn transparent_serialization() {
        let mut state = RuleState::default();
        state.record("genre", Some("Sci-Fi".into()));
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"genre":"Sci-Fi"}"#);

        let back: RuleState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}

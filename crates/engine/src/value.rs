use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Metadata for one document: field name to value.
///
/// Lookup-only from the engine's perspective; the engine never mutates it.
pub type MetadataMap = BTreeMap<String, FieldValue>;

/// A parsed metadata field value: a scalar or an ordered sequence of scalars.
///
/// Untagged so that YAML frontmatter values and TOML rule configuration both
/// deserialize into it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// True when there is nothing to emit: an empty string or empty sequence.
    /// Numbers and booleans always carry a value.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::String(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// The scalar elements of this value: the value itself, or each element
    /// of a sequence.
    pub fn elements(&self) -> Vec<&FieldValue> {
        match self {
            FieldValue::List(items) => items.iter().collect(),
            other => vec![other],
        }
    }
}

impl fmt::Display for FieldValue {
    /// Canonical string form: strings verbatim, numbers/booleans in their
    /// natural rendering, sequences comma-joined.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Float(n) => write!(f, "{n}"),
            FieldValue::String(s) => f.write_str(s),
            FieldValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

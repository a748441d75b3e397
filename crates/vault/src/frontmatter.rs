use serde_yaml::{Mapping, Value};
use tagsync_engine::{FieldValue, MetadataMap};

use crate::{Result, VaultError};

/// Split a document into its YAML frontmatter and body.
///
/// The frontmatter block is a leading `---` fence line, YAML lines, and a
/// closing `---` fence line. Returns `None` when the document has no block
/// or the block is unterminated.
pub fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let mut offset = first.len();
    for line in lines {
        if line.trim_end() == "---" {
            let yaml = &text[first.len()..offset];
            let body = &text[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}

/// A document's parsed frontmatter mapping.
///
/// Keeps the underlying YAML mapping so a rewrite preserves every key the
/// engine does not touch, in their original order.
#[derive(Debug, Clone, Default)]
pub struct Frontmatter {
    mapping: Mapping,
}

const TAGS_KEY: &str = "tags";

impl Frontmatter {
    pub fn parse(yaml: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(yaml)?;
        match value {
            Value::Mapping(mapping) => Ok(Self { mapping }),
            Value::Null => Ok(Self::default()),
            other => Err(VaultError::MalformedFrontmatter(format!(
                "expected a mapping, got {}",
                yaml_kind(&other)
            ))),
        }
    }

    /// The document's current tag sequence. A scalar `tags` value is read as
    /// a one-element sequence; missing or null means no tags.
    pub fn tags(&self) -> Vec<String> {
        match self.mapping.get(TAGS_KEY) {
            Some(Value::Sequence(items)) => {
                items.iter().filter_map(scalar_to_string).collect()
            }
            Some(value) => scalar_to_string(value).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Every field except `tags`, converted for the engine. Null values and
    /// nested mappings are dropped — the engine only sees scalars and
    /// sequences of scalars.
    pub fn metadata(&self) -> MetadataMap {
        let mut metadata = MetadataMap::new();
        for (key, value) in &self.mapping {
            let Some(key) = key.as_str() else {
                continue;
            };
            if key == TAGS_KEY {
                continue;
            }
            if let Some(field) = yaml_to_field_value(value) {
                metadata.insert(key.to_string(), field);
            }
        }
        metadata
    }

    /// Replace the `tags` key with the given sequence, or remove it entirely
    /// for `None`. Replacement happens in place, keeping the key's position.
    pub fn set_tags(&mut self, tags: Option<&[String]>) {
        match tags {
            Some(tags) => {
                let sequence = Value::Sequence(
                    tags.iter().map(|t| Value::String(t.clone())).collect(),
                );
                self.mapping.insert(Value::String(TAGS_KEY.into()), sequence);
            }
            None => {
                let tags_key = Value::String(TAGS_KEY.into());
                // Rebuild rather than remove-in-place to keep the order of
                // the remaining keys stable.
                self.mapping = std::mem::take(&mut self.mapping)
                    .into_iter()
                    .filter(|(key, _)| *key != tags_key)
                    .collect();
            }
        }
    }

    pub fn render(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.mapping)?)
    }
}

fn yaml_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn yaml_to_field_value(value: &Value) -> Option<FieldValue> {
    match value {
        Value::Bool(b) => Some(FieldValue::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(FieldValue::Int(i))
            } else {
                n.as_f64().map(FieldValue::Float)
            }
        }
        Value::String(s) => Some(FieldValue::String(s.clone())),
        Value::Sequence(items) => Some(FieldValue::List(
            items.iter().filter_map(yaml_to_field_value).collect(),
        )),
        Value::Null | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

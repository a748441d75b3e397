use crate::value::FieldValue;

/// Normalize a metadata value into a tag token.
///
/// Hierarchy is preserved: the string form is split on `/`, each segment is
/// normalized independently, and the segments are rejoined.
pub fn sanitize(value: &FieldValue) -> String {
    sanitize_str(&value.to_string())
}

/// Normalize a raw string into a tag token. Within each `/` segment, every
/// character outside `[A-Za-z0-9_]` becomes `_`.
pub fn sanitize_str(raw: &str) -> String {
    raw.split('/')
        .map(sanitize_segment)
        .collect::<Vec<_>>()
        .join("/")
}

fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

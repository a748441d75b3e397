/// Extract the display name from a wikilink-style reference value.
///
/// Handles the full decoration set: `[[Projects/My Book.md|Book Alias]]`
/// yields `My Book`. Steps, in order: strip the `[[` / `]]` wrapper, take
/// the path tail after the last `/`, drop a `|alias` suffix, drop a
/// trailing `.md` extension, trim whitespace.
///
/// Empty input yields an empty string; callers filter empty results out of
/// derived collections.
pub fn extract_display_name(raw: &str) -> String {
    let inner = raw.strip_prefix("[[").unwrap_or(raw);
    let inner = inner.strip_suffix("]]").unwrap_or(inner);
    let tail = inner.rsplit('/').next().unwrap_or(inner);
    let name = tail.split('|').next().unwrap_or(tail);
    let name = name.strip_suffix(".md").unwrap_or(name);
    name.trim().to_string()
}

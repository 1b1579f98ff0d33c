//! Shared text normalisation helpers for behavioural test suites.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| trimmed.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(trimmed)
}

/// Reads a step placeholder as an optional string; `nothing` means `None`.
#[must_use]
pub fn optional_text(value: &str) -> Option<String> {
    match unquote(value) {
        "nothing" => None,
        other => Some(other.to_owned()),
    }
}

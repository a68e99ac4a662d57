use regex::Regex;

lazy_static::lazy_static! {
    static ref DECK_ID_REGEX: Regex = Regex::new(
        r"[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}"
    )
    .expect("deck id pattern is valid");
}

/// Returns the first UUID shaped substring of the url, or an empty string if there is none.
/// An empty id is not rejected here, the export request will fail remotely instead.
pub fn extract_deck_id(deck_url: &str) -> String {
    DECK_ID_REGEX
        .find(deck_url)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Lowercases and trims a format name so "Commander" and " commander" hit the same legality key
pub fn normalize_format_name(format: &str) -> String {
    format.trim().to_lowercase()
}

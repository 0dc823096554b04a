//! Platform token parsing and normalization.
//!
//! The data layer stores `Item.platform` as a raw comma-joined string and
//! never decomposes it; these helpers are for the presentation side:
//! splitting the string into tokens, folding synonyms onto the canonical
//! short names, and choosing which single platform to display for an item.

/// Canonical platform short names used across the storefront.
pub const KNOWN_PLATFORMS: &[&str] = &["PC", "Xbox", "PS4", "PS5", "NS", "iOS", "Android"];

/// Split a comma-joined platform string into trimmed tokens.
///
/// Empty tokens (from stray commas or an empty string) are dropped; the
/// tokens are returned verbatim, without synonym folding.
pub fn split_platforms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join canonical platform tokens back into the comma-joined storage form.
pub fn join_platforms(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Fold a platform synonym onto its canonical short name.
///
/// Unrecognized tokens pass through trimmed but otherwise untouched.
pub fn normalize_platform(token: &str) -> String {
    match token.trim().to_lowercase().as_str() {
        "playstation" => "PS4".to_string(),
        "nintendo switch" => "NS".to_string(),
        "epic games" => "Epic".to_string(),
        _ => token.trim().to_string(),
    }
}

/// The first platform in the list, normalized. `None` for an empty string.
pub fn primary_platform(raw: &str) -> Option<String> {
    split_platforms(raw)
        .first()
        .map(|t| normalize_platform(t))
}

/// Pick the platform to display for an item given the active filter.
///
/// If a specific platform is selected and the item supports it, that
/// platform wins; otherwise the primary (first listed) platform is shown.
pub fn display_platform(raw: &str, selected: Option<&str>) -> Option<String> {
    let platforms: Vec<String> = split_platforms(raw)
        .iter()
        .map(|t| normalize_platform(t))
        .collect();

    if let Some(filter) = selected {
        let needle = filter.to_lowercase();
        if let Some(matching) = platforms
            .iter()
            .find(|p| p.to_lowercase().contains(&needle))
        {
            return Some(matching.clone());
        }
    }

    platforms.into_iter().next()
}

//! URL slug derivation for item names.

/// Derive a URL slug from an item name.
///
/// Lowercases, strips everything that is not ASCII alphanumeric or
/// whitespace, then joins the remaining words with hyphens:
/// `"Fire Sword +7"` becomes `"fire-sword-7"`.
///
/// Slugs are deterministic but not guaranteed globally unique.
pub fn slugify(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}

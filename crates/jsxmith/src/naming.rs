//! Component name derivation.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static WORD_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("Invalid word separator regex"));

/// Convert an identifier like `band_top-banner` to `BandTopBanner`.
///
/// Names that would start with a digit get a `Page` prefix; an empty result becomes `Page`.
pub fn to_component_name(raw: &str) -> String {
    let name: String = WORD_SEPARATOR_RE
        .split(raw)
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    if name.is_empty() {
        "Page".to_string()
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("Page{name}")
    } else {
        name
    }
}

/// Derive a component name from a file path's stem.
pub fn component_name_for(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    to_component_name(stem)
}

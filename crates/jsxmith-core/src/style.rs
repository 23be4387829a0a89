//! Inline `style` attribute to JSX style object.
//!
//! `color: red; font-size: 14px` becomes `{color: 'red', fontSize: '14px'}`, which the
//! caller embeds as `style={...}`.

use indexmap::IndexMap;

/// Parse a CSS declaration list into camelCase properties.
///
/// Segments without a `:` or with an empty property or value are dropped. A property
/// that appears twice keeps its first position and its last value.
pub fn parse_declarations(raw: &str) -> IndexMap<String, String> {
    let mut declarations = IndexMap::new();

    for segment in raw.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let Some((property, value)) = segment.split_once(':') else {
            tracing::debug!(segment, "Dropping style declaration without ':'");
            continue;
        };

        let property = property.trim();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            tracing::debug!(segment, "Dropping incomplete style declaration");
            continue;
        }

        declarations.insert(to_camel_case(property), value.to_string());
    }

    declarations
}

/// Serialize an inline style string as a JSX object literal.
///
/// Returns `None` when no declaration survives parsing.
pub fn serialize_style(raw: &str) -> Option<String> {
    let declarations = parse_declarations(raw);
    if declarations.is_empty() {
        return None;
    }

    let entries: Vec<String> = declarations
        .iter()
        .map(|(property, value)| format!("{}: '{}'", object_key(property), escape_value(value)))
        .collect();

    Some(format!("{{{}}}", entries.join(", ")))
}

/// Convert a CSS property name from kebab-case to camelCase.
///
/// The first word is kept as written. A leading hyphen leaves the first word empty, so
/// vendor prefixes come out capitalized (`-webkit-transition` -> `WebkitTransition`),
/// except `-ms-`, which React spells lowercase (`msTransform`). Custom properties
/// (`--accent`) are returned unchanged.
pub fn to_camel_case(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }

    let mut parts = property.split('-');
    let mut out = String::with_capacity(property.len());

    if let Some(first) = parts.next() {
        out.push_str(first);
    }

    for (index, part) in parts.enumerate() {
        if index == 0 && out.is_empty() && part == "ms" {
            out.push_str(part);
            continue;
        }

        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

/// Quote keys that are not plain JavaScript identifiers.
fn object_key(property: &str) -> String {
    let is_identifier = property
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && property
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if is_identifier {
        property.to_string()
    } else {
        format!("'{}'", escape_value(property))
    }
}

fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

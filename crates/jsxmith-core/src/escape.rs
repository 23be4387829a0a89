//! Escaping for JSX text content.

use std::borrow::Cow;

/// Characters that open or close a JSX expression container, with their replacements.
const BRACE_ESCAPES: [(char, &str); 2] = [('{', "&#123;"), ('}', "&#125;")];

/// Escape literal braces in text content.
///
/// Text is assumed already entity-decoded by the parser, so nothing else is touched.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(&['{', '}'][..]) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match BRACE_ESCAPES.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }

    Cow::Owned(out)
}

/// Make text safe inside a `{/* ... */}` comment.
pub fn escape_comment(text: &str) -> Cow<'_, str> {
    if text.contains("*/") {
        Cow::Owned(text.replace("*/", "* /"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_braces() {
        assert_eq!(escape_text("{name}"), "&#123;name&#125;");
        assert_eq!(escape_text("a}b{c"), "a&#125;b&#123;c");
    }

    #[test]
    fn leaves_other_characters_alone() {
        let text = "Price: $100 & up <b> \"quoted\" 'single'";

        assert!(matches!(escape_text(text), Cow::Borrowed(_)));
        assert_eq!(escape_text(text), text);
    }

    #[test]
    fn keeps_whitespace_only_text() {
        assert_eq!(escape_text("\n    "), "\n    ");
        assert_eq!(escape_text(""), "");
    }

    #[test]
    fn breaks_comment_terminators() {
        assert_eq!(escape_comment("a */ b"), "a * / b");
        assert_eq!(escape_comment("plain"), "plain");
    }
}

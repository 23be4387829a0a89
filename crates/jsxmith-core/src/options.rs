//! Converter options.

use serde::Deserialize;

/// How HTML comments are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentPolicy {
    /// Emit as `{/* ... */}`
    #[default]
    Keep,
    /// Omit comments
    Drop,
}

/// How inline `<script>` and `<style>` elements are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawTextPolicy {
    /// Convert like any other element
    #[default]
    Convert,
    /// Replace inline bodies with a JSX comment holding the original source
    Comment,
}

/// Options for a [`Converter`](crate::Converter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Comment handling
    pub comments: CommentPolicy,

    /// Inline script/style handling
    pub raw_text: RawTextPolicy,
}

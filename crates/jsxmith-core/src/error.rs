//! Error types for the converter boundary.

use serde_json::error::Category;

/// Errors raised when input crosses into the converter.
///
/// A well-typed [`Node`](crate::Node) tree always converts; these only arise while
/// building a tree from serialized input.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Input violates the node tree contract: {0}")]
    Contract(String),
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => ConvertError::Contract(err.to_string()),
            Category::Io | Category::Syntax | Category::Eof => {
                ConvertError::InvalidJson(err.to_string())
            }
        }
    }
}

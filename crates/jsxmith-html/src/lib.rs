//! HTML parsing front end for jsxmith.
//!
//! Parses HTML text with html5ever and lowers the DOM into the owned
//! [`jsxmith_core::Node`] tree the converter consumes.

pub mod document;
pub mod parser;

pub use document::Document;
pub use parser::{parse_document, ParseError, MAX_HTML_SIZE};

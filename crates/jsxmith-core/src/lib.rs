//! HTML element tree to JSX markup conversion.
//!
//! This crate is the rule-based core of jsxmith: it takes an already-parsed element tree
//! and renders JSX text (renamed attributes, self-closing void elements, style objects,
//! escaped braces). It performs no I/O and keeps no state between calls.

pub mod attributes;
pub mod convert;
pub mod error;
pub mod escape;
pub mod node;
pub mod options;
pub mod style;

pub use attributes::{rename, render_attribute, render_attributes};
pub use convert::{convert, is_void_element, Converter, VOID_ELEMENTS};
pub use error::ConvertError;
pub use escape::{escape_comment, escape_text};
pub use node::{nodes_from_json, AttrValue, Element, Node};
pub use options::{CommentPolicy, ConvertOptions, RawTextPolicy};
pub use style::{parse_declarations, serialize_style, to_camel_case};

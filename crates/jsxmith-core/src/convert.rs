//! Tree to JSX conversion.

use crate::attributes::render_attributes;
use crate::escape::{escape_comment, escape_text};
use crate::node::{AttrValue, Element, Node};
use crate::options::{CommentPolicy, ConvertOptions, RawTextPolicy};

/// Elements that self-close when they have no children.
pub const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Check whether a tag name is a void element. Case-sensitive.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Converts element trees to JSX markup.
///
/// Holds only immutable options, so one converter can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the given options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert a subtree to JSX.
    pub fn convert(&self, node: &Node) -> String {
        self.convert_all(std::slice::from_ref(node))
    }

    /// Convert a sequence of sibling nodes, concatenating the results.
    pub fn convert_all(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        self.write_nodes(nodes, &mut out);
        out
    }

    /// Depth-first walk with an explicit stack, so nesting depth is not bounded by the
    /// thread's call stack.
    fn write_nodes<'a>(&self, nodes: &'a [Node], out: &mut String) {
        let mut stack: Vec<Step<'a>> = nodes.iter().rev().map(Step::Open).collect();

        while let Some(step) = stack.pop() {
            match step {
                Step::Close(tag) => {
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
                Step::Open(Node::Element(el)) => {
                    if self.write_open_tag(el, out) {
                        stack.push(Step::Close(&el.tag));
                        stack.extend(el.children.iter().rev().map(Step::Open));
                    }
                }
                Step::Open(Node::Text { text }) => out.push_str(&escape_text(text)),
                Step::Open(Node::Comment { text }) => {
                    if self.options.comments == CommentPolicy::Keep {
                        out.push_str("{/* ");
                        out.push_str(&escape_comment(text));
                        out.push_str(" */}");
                    }
                }
            }
        }
    }

    /// Write the opening tag of an element.
    ///
    /// Returns `true` when children and a closing tag must follow, `false` when the
    /// element was written completely.
    fn write_open_tag(&self, el: &Element, out: &mut String) -> bool {
        if self.options.raw_text == RawTextPolicy::Comment && self.write_raw_text(el, out) {
            return false;
        }

        let attrs = render_attributes(&el.attributes);

        if is_void_element(&el.tag) {
            if el.is_empty() {
                out.push('<');
                out.push_str(&el.tag);
                out.push_str(&attrs);
                out.push_str(" />");
                return false;
            }
            tracing::trace!(tag = %el.tag, "Void element has children, emitting closing tag");
        }

        out.push('<');
        out.push_str(&el.tag);
        out.push_str(&attrs);
        out.push('>');
        true
    }

    /// Replace an inline script or stylesheet with a comment.
    ///
    /// Returns `false` when the element should be converted normally.
    fn write_raw_text(&self, el: &Element, out: &mut String) -> bool {
        let note = match el.tag.as_str() {
            "script" if !has_src(el) => "Inline script removed, original content:",
            "style" => "Inline styles, consider moving to a CSS file:",
            _ => return false,
        };

        let body = el.inner_text();
        if body.trim().is_empty() {
            return true;
        }

        tracing::debug!(tag = %el.tag, bytes = body.len(), "Replacing inline body with comment");

        out.push_str("{/* ");
        out.push_str(note);
        out.push('\n');
        out.push_str(&escape_comment(&body));
        out.push_str("\n*/}");
        true
    }
}

/// Pending work in the depth-first walk.
enum Step<'a> {
    Open(&'a Node),
    Close(&'a str),
}

fn has_src(el: &Element) -> bool {
    match el.get("src") {
        Some(AttrValue::String(s)) => !s.is_empty(),
        Some(AttrValue::List(tokens)) => !tokens.is_empty(),
        Some(AttrValue::Bool(flag)) => *flag,
        None => false,
    }
}

/// Convert a subtree with default options.
pub fn convert(node: &Node) -> String {
    Converter::new().convert(node)
}

//! HTML text to element tree.

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{parse_document as parse_html, Attribute, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use jsxmith_core::{AttrValue, Element, Node};

use crate::document::Document;

/// Maximum HTML input size (10 MiB)
pub const MAX_HTML_SIZE: usize = 10 * 1024 * 1024;

/// Attributes whose value is a whitespace-separated token list.
const TOKEN_LIST_ATTRIBUTES: [&str; 6] =
    ["class", "rel", "rev", "accept-charset", "headers", "accesskey"];

/// HTML boolean attributes; an empty value on these means `true`.
const BOOLEAN_ATTRIBUTES: [&str; 25] = [
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "selected",
];

/// Errors that can occur when parsing HTML.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("HTML input too large: {0} bytes (limit {MAX_HTML_SIZE})")]
    TooLarge(usize),
}

/// Parse an HTML document into an element tree.
///
/// Parsing is error-tolerant: malformed markup is repaired the way a browser would, so
/// the only failure is an oversized input.
pub fn parse_document(html: &str) -> Result<Document, ParseError> {
    if html.len() > MAX_HTML_SIZE {
        return Err(ParseError::TooLarge(html.len()));
    }

    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };

    let dom = parse_html(RcDom::default(), opts)
        .from_utf8()
        .one(html.as_bytes());

    if !dom.errors.is_empty() {
        tracing::debug!(count = dom.errors.len(), "HTML parser recovered from errors");
    }

    Ok(Document {
        nodes: lower_children(&dom.document),
    })
}

/// An element whose children are still being lowered.
struct Frame {
    element: Element,
    pending: std::vec::IntoIter<Handle>,
}

/// Lower the children of a DOM node into an owned tree.
///
/// Walks with an explicit stack of open elements, so deeply nested markup cannot
/// exhaust the call stack.
fn lower_children(handle: &Handle) -> Vec<Node> {
    let mut roots = Vec::new();
    let mut top = child_handles(handle).into_iter();
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        let next = match stack.last_mut() {
            Some(frame) => frame.pending.next(),
            None => top.next(),
        };

        match next {
            Some(child) => match lower(&child) {
                Lowered::Element(element) => stack.push(Frame {
                    element,
                    pending: content_handles(&child).into_iter(),
                }),
                Lowered::Leaf(node) => attach(&mut stack, &mut roots, node),
                Lowered::Skip => {}
            },
            None => match stack.pop() {
                Some(frame) => attach(&mut stack, &mut roots, frame.element.into()),
                None => break,
            },
        }
    }

    roots
}

fn attach(stack: &mut [Frame], roots: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.element.children.push(node),
        None => roots.push(node),
    }
}

fn child_handles(handle: &Handle) -> Vec<Handle> {
    handle.children.borrow().clone()
}

/// Children to lower under an element. `<template>` keeps its content in a separate
/// fragment.
fn content_handles(handle: &Handle) -> Vec<Handle> {
    if let NodeData::Element {
        template_contents, ..
    } = &handle.data
    {
        if let Some(contents) = template_contents.borrow().as_ref() {
            return child_handles(contents);
        }
    }
    child_handles(handle)
}

enum Lowered {
    /// An element with no children yet
    Element(Element),
    Leaf(Node),
    Skip,
}

/// Lower one DOM node without its children. Doctypes and processing instructions are
/// dropped.
fn lower(handle: &Handle) -> Lowered {
    match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let mut el = Element::new(&*name.local);

            for attr in attrs.borrow().iter() {
                let (key, value) = lower_attribute(attr);
                el.attributes.insert(key, value);
            }

            Lowered::Element(el)
        }
        NodeData::Text { contents } => Lowered::Leaf(Node::text(contents.borrow().to_string())),
        NodeData::Comment { contents } => Lowered::Leaf(Node::comment(contents.to_string())),
        NodeData::Document | NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => {
            Lowered::Skip
        }
    }
}

fn lower_attribute(attr: &Attribute) -> (String, AttrValue) {
    let local: &str = &attr.name.local;
    let key = match &attr.name.prefix {
        Some(prefix) => format!("{prefix}:{local}"),
        None => local.to_string(),
    };

    let raw: &str = &attr.value;
    let value = if TOKEN_LIST_ATTRIBUTES.contains(&key.as_str()) {
        AttrValue::List(raw.split_whitespace().map(str::to_string).collect())
    } else if raw.is_empty() && BOOLEAN_ATTRIBUTES.contains(&key.as_str()) {
        AttrValue::Bool(true)
    } else {
        AttrValue::String(raw.to_string())
    };

    (key, value)
}

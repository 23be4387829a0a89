//! Parsed HTML document.

use jsxmith_core::{Element, Node};

/// A parsed document: the top-level nodes under the document root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Top-level nodes (usually a single `html` element, plus any leading comments)
    pub nodes: Vec<Node>,
}

impl Document {
    /// Find the first element with the given tag, depth-first in document order.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        find_element(&self.nodes, tag)
    }

    /// The nodes a page component should render.
    ///
    /// Returns the children of `<body>`, or every top-level node when the document has
    /// no body element.
    pub fn body(&self) -> &[Node] {
        match self.find("body") {
            Some(body) => &body.children,
            None => &self.nodes,
        }
    }
}

fn find_element<'a>(nodes: &'a [Node], tag: &str) -> Option<&'a Element> {
    let mut stack: Vec<&Node> = nodes.iter().rev().collect();

    while let Some(node) = stack.pop() {
        if let Some(el) = node.as_element() {
            if el.tag == tag {
                return Some(el);
            }
            stack.extend(el.children.iter().rev());
        }
    }

    None
}

//! Element tree consumed by the converter.
//!
//! The tree is owned top-down: an [`Element`] owns its children and nothing points back
//! up, so a well-typed tree can never contain a cycle.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConvertError;

/// A node in an already-parsed HTML document.
///
/// Serialized with an internal `type` tag. Deserialization reads the fields directly
/// instead of buffering each node, so nesting depth is bounded only by the deserializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// An element with a tag, attributes and children
    Element(Element),
    /// Raw text content, already entity-decoded
    Text { text: String },
    /// An HTML comment
    Comment { text: String },
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create a comment node.
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment { text: text.into() }
    }

    /// Get the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// An HTML element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name, case preserved as supplied
    pub tag: String,

    /// Attributes in source order
    pub attributes: IndexMap<String, AttrValue>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute, replacing any earlier value under the same key.
    ///
    /// A replaced key keeps its original position.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Append a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Look up an attribute value by its source name.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Check whether the element has no children at all.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Concatenated text of the direct text children.
    pub fn inner_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Drop for Element {
    // Flatten the subtree so dropping a deep tree does not recurse per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut el) = node {
                pending.append(&mut el.children);
            }
        }
    }
}

const NODE_TYPES: &[&str] = &["element", "text", "comment"];

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a node object with a \"type\" field")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut kind: Option<String> = None;
        let mut tag: Option<String> = None;
        let mut text: Option<String> = None;
        let mut attributes: Option<IndexMap<String, AttrValue>> = None;
        let mut children: Option<Vec<Node>> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "type" => next_once(&mut map, &mut kind, "type")?,
                "tag" => next_once(&mut map, &mut tag, "tag")?,
                "text" => next_once(&mut map, &mut text, "text")?,
                "attributes" => next_once(&mut map, &mut attributes, "attributes")?,
                "children" => next_once(&mut map, &mut children, "children")?,
                _ => {
                    map.next_value::<de::IgnoredAny>()?;
                }
            }
        }

        let kind = kind.ok_or_else(|| de::Error::missing_field("type"))?;
        match kind.as_str() {
            "element" => Ok(Node::Element(Element {
                tag: tag.ok_or_else(|| de::Error::missing_field("tag"))?,
                attributes: attributes.unwrap_or_default(),
                children: children.unwrap_or_default(),
            })),
            "text" => Ok(Node::Text {
                text: text.ok_or_else(|| de::Error::missing_field("text"))?,
            }),
            "comment" => Ok(Node::Comment {
                text: text.ok_or_else(|| de::Error::missing_field("text"))?,
            }),
            other => Err(de::Error::unknown_variant(other, NODE_TYPES)),
        }
    }
}

fn next_once<'de, A, T>(
    map: &mut A,
    slot: &mut Option<T>,
    field: &'static str,
) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
    T: Deserialize<'de>,
{
    if slot.is_some() {
        return Err(de::Error::duplicate_field(field));
    }
    *slot = Some(map.next_value()?);
    Ok(())
}

/// An attribute value as produced by the HTML parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Plain string: href="/"
    String(String),
    /// Token list: class="a b c"
    List(Vec<String>),
    /// Boolean flag: disabled
    Bool(bool),
}

impl AttrValue {
    /// Get as string if it's a scalar value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(tokens: Vec<String>) -> Self {
        AttrValue::List(tokens)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(tokens: Vec<&str>) -> Self {
        AttrValue::List(tokens.into_iter().map(str::to_string).collect())
    }
}

/// Parse a JSON document holding either one node or an array of nodes.
///
/// Attribute values other than a string, a string array or a boolean are rejected
/// with [`ConvertError::Contract`]. Nesting depth is not limited; the stack grows on the
/// heap as the tree gets deeper.
pub fn nodes_from_json(source: &str) -> Result<Vec<Node>, ConvertError> {
    let mut json = serde_json::Deserializer::from_str(source);
    json.disable_recursion_limit();

    let nodes = if source.trim_start().starts_with('[') {
        Vec::<Node>::deserialize(serde_stacker::Deserializer::new(&mut json))?
    } else {
        vec![Node::deserialize(serde_stacker::Deserializer::new(&mut json))?]
    };
    json.end()?;

    Ok(nodes)
}

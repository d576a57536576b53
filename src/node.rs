//! Node classification and raw per-node attribute primitives.
//!
//! `dom_query` owns the tree and the attribute vectors; this module is the
//! only place that touches them directly. Every function takes an already
//! lower-cased attribute name.

use dom_query::NodeRef;

/// Kind of a tree node, as far as this crate cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element,
    Text,
    Comment,
    /// Doctype, processing instruction or fragment root.
    Other,
}

impl NodeKind {
    /// Classifies a node.
    #[must_use]
    pub fn of(node: &NodeRef) -> Self {
        if node.is_element() {
            Self::Element
        } else if node.is_text() {
            Self::Text
        } else if node.is_comment() {
            Self::Comment
        } else if node.is_document() {
            Self::Document
        } else {
            Self::Other
        }
    }
}

/// Lower-cased tag name of an element node, `None` for other kinds.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Value of the attribute `name`, `None` when absent or not an element.
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|v| v.to_string())
}

/// Overwrites `name` in place, or appends it after the existing attributes.
#[inline]
pub fn set_attribute(node: &NodeRef, name: &str, value: &str) {
    if node.is_element() {
        node.set_attr(name, value);
    }
}

/// Removes `name` if present.
///
/// The relative order of the remaining attributes is not part of the
/// contract.
#[inline]
pub fn remove_attribute(node: &NodeRef, name: &str) {
    if node.is_element() {
        node.remove_attr(name);
    }
}

/// Children of `node` in document order, text and comment nodes included.
pub fn child_nodes<'a>(node: &NodeRef<'a>) -> impl Iterator<Item = NodeRef<'a>> {
    std::iter::successors(node.first_child(), |n| n.next_sibling())
}

//! Text and markup extraction
//!
//! `text` walks the subtree itself so that every text node can be wrapped in
//! a separator; markup goes through a [`Render`] implementation.

use dom_query::NodeRef;

use crate::dom::Selection;
use crate::error::Result;
use crate::node::{self, NodeKind};
use crate::render::{HtmlRenderer, Render};
use crate::tracing_macros::debug;

impl<'a> Selection<'a> {
    /// Combined text of every matched node and its descendants, using the
    /// document's configured separator.
    ///
    /// jQuery equivalent: `.text()`
    #[must_use]
    pub fn text(&self) -> String {
        self.text_with_separator(&self.doc.options().text_separator)
    }

    /// Combined text where each text node is emitted as
    /// `separator + content + separator`.
    ///
    /// Whitespace is kept as is. Results of the matched nodes are
    /// concatenated without anything in between.
    #[must_use]
    pub fn text_with_separator(&self, separator: &str) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            push_text(node, separator, &mut out);
        }
        out
    }

    /// Markup of the first node's children, text and comments included.
    ///
    /// Empty for an empty selection.
    ///
    /// jQuery equivalent: `.html()`
    pub fn html(&self) -> Result<String> {
        self.html_with(&HtmlRenderer)
    }

    /// [`Selection::html`] with a custom renderer.
    ///
    /// If any child fails to render, the error is returned and the markup
    /// assembled so far is discarded.
    pub fn html_with<R: Render>(&self, renderer: &R) -> Result<String> {
        let mut out = String::new();
        if let Some(first) = self.nodes.first() {
            for child in node::child_nodes(first) {
                if let Err(e) = renderer.render(&child, &mut out) {
                    debug!(error = %e, "inner markup rendering failed");
                    return Err(e);
                }
            }
        }
        Ok(out)
    }

    /// Markup of the first node including its own start and end tags.
    pub fn outer_html(&self) -> Result<String> {
        self.outer_html_with(&HtmlRenderer)
    }

    /// [`Selection::outer_html`] with a custom renderer.
    pub fn outer_html_with<R: Render>(&self, renderer: &R) -> Result<String> {
        let mut out = String::new();
        if let Some(first) = self.nodes.first() {
            if let Err(e) = renderer.render(first, &mut out) {
                debug!(error = %e, "outer markup rendering failed");
                return Err(e);
            }
        }
        Ok(out)
    }

    /// Name of the first node: the lower-cased tag for elements, `#text`,
    /// `#comment` or `#document` otherwise, and `""` when empty.
    #[must_use]
    pub fn node_name(&self) -> String {
        let Some(first) = self.nodes.first() else {
            return String::new();
        };
        match NodeKind::of(first) {
            NodeKind::Element => node::tag_name(first).unwrap_or_default(),
            NodeKind::Text => "#text".to_string(),
            NodeKind::Comment => "#comment".to_string(),
            NodeKind::Document => "#document".to_string(),
            NodeKind::Other => first.node_name().map(|n| n.to_string()).unwrap_or_default(),
        }
    }
}

fn push_text(node: &NodeRef, separator: &str, out: &mut String) {
    if NodeKind::of(node) == NodeKind::Text {
        out.push_str(separator);
        out.push_str(&node.text());
        out.push_str(separator);
        return;
    }
    for child in node::child_nodes(node) {
        push_text(&child, separator, out);
    }
}

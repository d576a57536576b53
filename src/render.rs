//! Markup renderers
//!
//! Serialization is delegated to a [`Render`] implementation so that the
//! inner/outer markup operations can surface renderer failures. The default
//! [`HtmlRenderer`] uses dom_query's html5ever serializer.

use dom_query::NodeRef;

use crate::error::Result;

/// Serializes one node, its own tags included, onto `out`.
pub trait Render {
    /// Appends the markup of `node` and its subtree to `out`.
    fn render(&self, node: &NodeRef, out: &mut String) -> Result<()>;
}

/// HTML5 serializer backed by dom_query.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Render for HtmlRenderer {
    fn render(&self, node: &NodeRef, out: &mut String) -> Result<()> {
        out.push_str(&node.html());
        Ok(())
    }
}

impl<R: Render + ?Sized> Render for &R {
    fn render(&self, node: &NodeRef, out: &mut String) -> Result<()> {
        (**self).render(node, out)
    }
}

//! Document and Selection types
//!
//! Wraps `dom_query` so that every selection remembers the document it came
//! from (and that document's [`Options`]). Parsing, selector matching and the
//! tree storage all stay in `dom_query`; the operations in the sibling
//! modules are added to [`Selection`] through separate `impl` blocks.

use std::collections::HashSet;

use dom_query::{Matcher, NodeId, NodeRef};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::tracing_macros::debug;

/// A parsed HTML document together with its options.
pub struct Document {
    inner: dom_query::Document,
    options: Options,
}

impl Document {
    /// Parses `html` with default options.
    #[must_use]
    pub fn new(html: &str) -> Self {
        Self::with_options(html, Options::default())
    }

    /// Parses `html` with the given options.
    #[must_use]
    pub fn with_options(html: &str, options: Options) -> Self {
        Self {
            inner: dom_query::Document::from(html),
            options,
        }
    }

    /// Options shared by every selection made from this document.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Underlying `dom_query` document.
    #[inline]
    #[must_use]
    pub fn inner(&self) -> &dom_query::Document {
        &self.inner
    }

    /// Selection holding only the document root.
    #[must_use]
    pub fn root(&self) -> Selection<'_> {
        Selection::new(self, vec![self.inner.root()])
    }

    /// All elements matching `css`. An invalid selector yields an empty
    /// selection.
    #[must_use]
    pub fn select(&self, css: &str) -> Selection<'_> {
        self.root().find(css)
    }

    /// Like [`Document::select`] but reports an invalid selector.
    pub fn try_select(&self, css: &str) -> Result<Selection<'_>> {
        self.root().try_find(css)
    }

    /// Serialized markup of the whole document.
    #[must_use]
    pub fn html(&self) -> String {
        self.inner.html().to_string()
    }
}

impl From<&str> for Document {
    fn from(html: &str) -> Self {
        Self::new(html)
    }
}

impl From<String> for Document {
    fn from(html: String) -> Self {
        Self::new(&html)
    }
}

impl From<dom_query::Document> for Document {
    fn from(inner: dom_query::Document) -> Self {
        Self {
            inner,
            options: Options::default(),
        }
    }
}

/// An ordered, possibly empty set of nodes from one [`Document`].
///
/// Reads act on the first node, writes act on every node. The same node may
/// appear more than once.
#[derive(Clone)]
pub struct Selection<'a> {
    pub(crate) doc: &'a Document,
    pub(crate) nodes: Vec<NodeRef<'a>>,
}

impl<'a> Selection<'a> {
    pub(crate) fn new(doc: &'a Document, nodes: Vec<NodeRef<'a>>) -> Self {
        Self { doc, nodes }
    }

    /// Matched nodes in selection order.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[NodeRef<'a>] {
        &self.nodes
    }

    /// Number of matched nodes.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.nodes.len()
    }

    /// Alias for [`Selection::length`].
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.length()
    }

    /// True if nothing matched.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if at least one node matched. Same as `!is_empty()`.
    #[inline]
    #[must_use]
    pub fn exists(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Document this selection was made from.
    #[inline]
    #[must_use]
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Selection of the owning document's root.
    #[must_use]
    pub fn document_selection(&self) -> Selection<'a> {
        self.doc.root()
    }

    /// Reduces the selection to its first node.
    #[must_use]
    pub fn first(&self) -> Selection<'a> {
        Selection::new(self.doc, self.nodes.first().cloned().into_iter().collect())
    }

    /// Reduces the selection to its last node.
    #[must_use]
    pub fn last(&self) -> Selection<'a> {
        Selection::new(self.doc, self.nodes.last().cloned().into_iter().collect())
    }

    /// One single-node selection per matched node.
    pub fn iter(&self) -> impl Iterator<Item = Selection<'a>> + '_ {
        self.nodes
            .iter()
            .map(move |node| Selection::new(self.doc, vec![node.clone()]))
    }

    /// Descendants of the matched nodes that match `css`, without
    /// duplicates. An invalid selector yields an empty selection.
    #[must_use]
    pub fn find(&self, css: &str) -> Selection<'a> {
        self.try_find(css)
            .unwrap_or_else(|_| Selection::new(self.doc, Vec::new()))
    }

    /// Like [`Selection::find`] but reports an invalid selector.
    pub fn try_find(&self, css: &str) -> Result<Selection<'a>> {
        let matcher = compile(css)?;
        Ok(self.find_matcher(&matcher))
    }

    /// Descendants matching a precompiled selector, without duplicates.
    pub(crate) fn find_matcher(&self, matcher: &Matcher) -> Selection<'a> {
        if let [root] = self.nodes.as_slice() {
            let found = dom_query::Selection::from(root.clone()).select_matcher(matcher);
            return Selection::new(self.doc, found.nodes().to_vec());
        }

        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut found: Vec<NodeRef<'a>> = Vec::new();
        for node in &self.nodes {
            let matches = dom_query::Selection::from(node.clone()).select_matcher(matcher);
            for m in matches.nodes() {
                if seen.insert(m.id) {
                    found.push(m.clone());
                }
            }
        }
        Selection::new(self.doc, found)
    }

    /// Matched nodes that themselves match `css`. An invalid selector
    /// yields an empty selection.
    #[must_use]
    pub fn filter(&self, css: &str) -> Selection<'a> {
        match compile(css) {
            Ok(matcher) => self.filter_matcher(&matcher),
            Err(_) => Selection::new(self.doc, Vec::new()),
        }
    }

    pub(crate) fn filter_matcher(&self, matcher: &Matcher) -> Selection<'a> {
        let nodes = self
            .nodes
            .iter()
            .filter(|node| node_matches(node, matcher))
            .cloned()
            .collect();
        Selection::new(self.doc, nodes)
    }

    /// True if any matched node matches `css`.
    #[must_use]
    pub fn is(&self, css: &str) -> bool {
        compile(css).is_ok_and(|matcher| self.nodes.iter().any(|n| node_matches(n, &matcher)))
    }
}

impl std::fmt::Debug for Selection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("length", &self.nodes.len())
            .finish()
    }
}

/// Compiles a CSS selector.
pub(crate) fn compile(css: &str) -> Result<Matcher> {
    Matcher::new(css).map_err(|_| {
        debug!(selector = css, "invalid selector");
        Error::InvalidSelector(css.to_string())
    })
}

/// True if `node` itself matches.
pub(crate) fn node_matches(node: &NodeRef, matcher: &Matcher) -> bool {
    node.is_element() && dom_query::Selection::from(node.clone()).is_matcher(matcher)
}

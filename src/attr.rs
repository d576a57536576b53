//! Attribute accessor
//!
//! Case-insensitive attribute reads and writes on a [`Selection`]. Names are
//! lower-cased before use, and every operation accepts a space-delimited
//! list of names (`"disabled readonly"`).

use crate::dom::Selection;
use crate::node;
use crate::normalize::attr_names;
use crate::tracing_macros::trace;

impl<'a> Selection<'a> {
    /// Value of the attribute on the first node.
    ///
    /// With several names, the first one present wins. Returns `None` for an
    /// empty selection or when no name is present.
    ///
    /// jQuery equivalent: `.attr(name)`
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<String> {
        let first = self.nodes.first()?;
        attr_names(name)
            .iter()
            .find_map(|n| node::get_attribute(first, n))
    }

    /// Like [`Selection::attr`] but falls back to `default`.
    #[must_use]
    pub fn attr_or(&self, name: &str, default: &str) -> String {
        self.attr(name).unwrap_or_else(|| default.to_string())
    }

    /// True if the first node carries any of the named attributes.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Sets each named attribute to `value` on every node.
    ///
    /// An existing attribute keeps its position; a new one is appended.
    ///
    /// jQuery equivalent: `.attr(name, value)`
    pub fn set_attr(&self, name: &str, value: &str) -> &Self {
        for n in attr_names(name) {
            for node in &self.nodes {
                node::set_attribute(node, &n, value);
            }
        }
        self
    }

    /// Removes each named attribute from every node.
    ///
    /// Missing attributes are ignored, so repeating the call is a no-op.
    ///
    /// jQuery equivalent: `.removeAttr(name)`
    pub fn remove_attr(&self, name: &str) -> &Self {
        for n in attr_names(name) {
            for node in &self.nodes {
                node::remove_attribute(node, &n);
            }
        }
        self
    }

    /// Finds every descendant carrying any of the named attributes and
    /// removes those attributes from it, whatever their values.
    ///
    /// Names that cannot form a selector make the call a no-op.
    pub fn find_remove_attr(&self, name: &str) -> &Self {
        let names = attr_names(name);
        if names.is_empty() {
            return self;
        }

        let css = names
            .iter()
            .map(|n| format!("[{n}]"))
            .collect::<Vec<_>>()
            .join(", ");
        match self.try_find(&css) {
            Ok(found) => {
                trace!(selector = %css, matched = found.length(), "removing attributes");
                for n in &names {
                    for node in &found.nodes {
                        node::remove_attribute(node, n);
                    }
                }
            }
            Err(_) => {
                trace!(selector = %css, "attribute list is not a valid selector");
            }
        }
        self
    }
}

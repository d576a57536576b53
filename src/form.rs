//! Form control value resolution
//!
//! Recovers what a form would submit for the last relevant control in a
//! selection. The value is returned verbatim: no trimming, no case folding.

use std::sync::LazyLock;

use dom_query::{Matcher, NodeRef};

use crate::dom::{compile, node_matches, Selection};
use crate::tracing_macros::trace;

/// Controls that carry a value, as a selector group.
const FORM_CONTROLS: &str = "input[type=text], input[type=hidden], \
     input[type=radio][checked], input[type=checkbox][checked], \
     textarea, select";

static FORM_CONTROLS_MATCHER: LazyLock<Option<Matcher>> =
    LazyLock::new(|| compile(FORM_CONTROLS).ok());

impl<'a> Selection<'a> {
    /// Effective value of the last form control among the matched nodes and
    /// their descendants.
    ///
    /// - checked checkbox/radio: `value`, or `"on"` when absent
    /// - text/hidden input: `value`, or `""`
    /// - select: the selected option (or the first option) `value`,
    ///   falling back to its inner markup
    /// - textarea: its inner markup
    ///
    /// Returns `""` when nothing matches.
    ///
    /// jQuery equivalent: `.val()`
    #[must_use]
    pub fn val(&self) -> String {
        let Some(control) = self.last_form_control() else {
            return String::new();
        };
        let control = Selection::new(self.doc, vec![control]);

        match control.node_name().as_str() {
            "input" => {
                let kind = control.attr_or("type", "text").to_ascii_lowercase();
                match kind.as_str() {
                    "checkbox" | "radio" => control.attr_or("value", "on"),
                    _ => control.attr_or("value", ""),
                }
            }
            "select" => select_value(&control),
            // Render failures are logged by `html_with`.
            "textarea" => control.html().unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Last form control in selection order, looking at each node and then
    /// its descendants.
    fn last_form_control(&self) -> Option<NodeRef<'a>> {
        let matcher = LazyLock::force(&FORM_CONTROLS_MATCHER).as_ref()?;
        let mut last = None;
        for top in &self.nodes {
            let below = dom_query::Selection::from(top.clone()).select_matcher(matcher);
            if let Some(node) = below.nodes().last() {
                last = Some(node.clone());
            } else if node_matches(top, matcher) {
                last = Some(top.clone());
            }
        }
        trace!(roots = self.nodes.len(), found = last.is_some(), "form control lookup");
        last
    }
}

/// Value of a `select`: its selected option, else its first option.
fn select_value(select: &Selection) -> String {
    let mut option = select.find("option[selected]");
    if option.is_empty() {
        option = select.find("option").first();
    }
    if option.is_empty() {
        return String::new();
    }

    option
        .attr("value")
        .unwrap_or_else(|| option.html().unwrap_or_default())
}

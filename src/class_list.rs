//! Class-list engine
//!
//! Works on the `class` attribute as a bracketed string (`" a b c "`), so a
//! token is present exactly when `" token "` is a substring. The bracketed
//! string is rebuilt from the attribute on every call and written back once
//! per node when the operation is done; an empty result deletes the
//! attribute instead of leaving `class=""`.

use dom_query::NodeRef;

use crate::dom::Selection;
use crate::node;
use crate::normalize::{bracket_classes, class_tokens, trim_markup_whitespace};

const CLASS: &str = "class";

impl<'a> Selection<'a> {
    /// True if any matched node has the class `name`.
    ///
    /// jQuery equivalent: `.hasClass(name)`
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        let needle = format!(" {name} ");
        self.nodes
            .iter()
            .any(|node| read_classes(node).contains(&needle))
    }

    /// Adds the given classes to every matched node.
    ///
    /// Names may be passed as separate arguments or space-separated in one
    /// string. Classes already present are not repeated, and existing
    /// classes keep their order.
    ///
    /// jQuery equivalent: `.addClass(names)`
    pub fn add_class<S: AsRef<str>>(&self, names: &[S]) -> &Self {
        let tokens = class_tokens(names);
        if tokens.is_empty() {
            return self;
        }

        for node in self.nodes.iter().filter(|n| n.is_element()) {
            let mut classes = read_classes(node);
            for token in &tokens {
                if !contains_token(&classes, token) {
                    push_token(&mut classes, token);
                }
            }
            write_classes(node, &classes);
        }
        self
    }

    /// Removes the given classes from every matched node.
    ///
    /// With no names at all, the `class` attribute itself is removed.
    ///
    /// jQuery equivalent: `.removeClass(names)`
    pub fn remove_class<S: AsRef<str>>(&self, names: &[S]) -> &Self {
        let tokens = class_tokens(names);

        for node in self.nodes.iter().filter(|n| n.is_element()) {
            if tokens.is_empty() {
                node::remove_attribute(node, CLASS);
                continue;
            }

            let mut classes = read_classes(node);
            for token in &tokens {
                strip_token(&mut classes, token);
            }
            write_classes(node, &classes);
        }
        self
    }

    /// Removes every class from every matched node.
    pub fn clear_classes(&self) -> &Self {
        self.remove_class::<&str>(&[])
    }

    /// Adds each class that is missing and removes each class that is
    /// present, per node.
    ///
    /// jQuery equivalent: `.toggleClass(names)`
    pub fn toggle_class<S: AsRef<str>>(&self, names: &[S]) -> &Self {
        let tokens = class_tokens(names);
        if tokens.is_empty() {
            return self;
        }

        for node in self.nodes.iter().filter(|n| n.is_element()) {
            let mut classes = read_classes(node);
            for token in &tokens {
                if contains_token(&classes, token) {
                    strip_token(&mut classes, token);
                } else {
                    push_token(&mut classes, token);
                }
            }
            write_classes(node, &classes);
        }
        self
    }
}

/// Bracketed class string of `node`, `" "` when it has none.
fn read_classes(node: &NodeRef) -> String {
    node::get_attribute(node, CLASS).map_or_else(|| " ".to_string(), |v| bracket_classes(&v))
}

fn contains_token(classes: &str, token: &str) -> bool {
    classes.contains(&format!(" {token} "))
}

fn push_token(classes: &mut String, token: &str) {
    classes.push_str(token);
    classes.push(' ');
}

fn strip_token(classes: &mut String, token: &str) {
    let needle = format!(" {token} ");
    // Adjacent duplicates share a space, so one pass can leave a copy behind.
    while classes.contains(&needle) {
        *classes = classes.replace(&needle, " ");
    }
}

fn write_classes(node: &NodeRef, classes: &str) {
    let value = trim_markup_whitespace(classes);
    if value.is_empty() {
        node::remove_attribute(node, CLASS);
    } else {
        node::set_attribute(node, CLASS, value);
    }
}

#[cfg(test)]
mod tests {
    use crate::Document;

    #[test]
    fn test_has_class_token_boundaries() {
        let doc = Document::new(r#"<div class="button-primary large">x</div>"#);
        let div = doc.select("div");

        assert!(div.has_class("large"));
        assert!(div.has_class("button-primary"));
        assert!(!div.has_class("button"));
        assert!(!div.has_class("primary"));
        assert!(!div.has_class(""));
    }

    #[test]
    fn test_has_class_any_node() {
        let doc = Document::new(r#"<p>1</p><p class="hit">2</p>"#);

        assert!(doc.select("p").has_class("hit"));
        assert!(!doc.select("p").first().has_class("hit"));
    }

    #[test]
    fn test_has_class_normalizes_whitespace() {
        let doc = Document::new("<div class=\"a\tb\n c\">x</div>");
        let div = doc.select("div");

        assert!(div.has_class("a"));
        assert!(div.has_class("b"));
        assert!(div.has_class("c"));
    }

    #[test]
    fn test_add_class_appends_missing_only() {
        let doc = Document::new(r#"<div class="b a">x</div>"#);
        let div = doc.select("div");

        div.add_class(&["a c", "d"]);
        assert_eq!(div.attr("class"), Some("b a c d".to_string()));
    }

    #[test]
    fn test_add_class_empty_request_creates_nothing() {
        let doc = Document::new("<div>x</div>");
        let div = doc.select("div");

        div.add_class::<&str>(&[]);
        div.add_class(&["  "]);
        assert!(!div.has_attr("class"));
    }

    #[test]
    fn test_remove_class_collapses_and_deletes() {
        let doc = Document::new(r#"<div class="a b a c">x</div>"#);
        let div = doc.select("div");

        div.remove_class(&["a"]);
        assert_eq!(div.attr("class"), Some("b c".to_string()));

        div.remove_class(&["b c"]);
        assert!(!div.has_attr("class"));
    }

    #[test]
    fn test_remove_class_without_names_drops_attribute() {
        let doc = Document::new(r#"<div class="a b" id="x">x</div>"#);
        let div = doc.select("div");

        div.clear_classes();
        assert!(!div.has_attr("class"));
        assert!(!div.has_class("a"));
        assert_eq!(div.attr("id"), Some("x".to_string()));

        div.add_class(&["z"]);
        assert_eq!(div.attr("class"), Some("z".to_string()));
    }

    #[test]
    fn test_toggle_class_per_node() {
        let doc = Document::new(r#"<p class="on">1</p><p>2</p>"#);
        let ps = doc.select("p");

        ps.toggle_class(&["on"]);
        assert!(!ps.first().has_attr("class"));
        assert_eq!(ps.last().attr("class"), Some("on".to_string()));
    }

    #[test]
    fn test_mutators_skip_text_nodes() {
        let doc = Document::new("<p>text</p>");
        let text = doc.select("p").nodes()[0].first_child().unwrap();
        let sel = crate::dom::Selection::new(&doc, vec![text]);

        sel.add_class(&["x"]).toggle_class(&["y"]).remove_class(&["x"]);
        assert!(!sel.has_class("x"));
        assert_eq!(doc.select("p").outer_html().unwrap(), "<p>text</p>");
    }
}

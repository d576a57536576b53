use html_selection::Document;

/// Every read on an empty selection returns its zero value
#[test]
fn reads_on_empty_selection() {
    let doc = Document::new("<div>content</div>");
    let empty = doc.select("span");

    assert_eq!(empty.attr("id"), None);
    assert_eq!(empty.attr_or("id", "fallback"), "fallback");
    assert!(!empty.has_attr("id"));
    assert!(!empty.has_class("x"));
    assert_eq!(empty.text(), "");
    assert_eq!(empty.html().unwrap(), "");
    assert_eq!(empty.outer_html().unwrap(), "");
    assert_eq!(empty.node_name(), "");
    assert_eq!(empty.val(), "");
    assert_eq!(empty.mime_type(), "");
    assert_eq!(empty.object_src(), "");
}

/// Mutators on an empty selection are chainable no-ops
#[test]
fn writes_on_empty_selection() {
    let doc = Document::new("<div>content</div>");
    let before = doc.html();

    doc.select("span")
        .set_attr("id", "x")
        .remove_attr("id")
        .find_remove_attr("class")
        .add_class(&["a"])
        .remove_class(&["a"])
        .toggle_class(&["b"]);

    assert_eq!(doc.html(), before);
}

/// Degenerate arguments never change the tree
#[test]
fn degenerate_arguments_are_ignored() {
    let doc = Document::new(r#"<div class="keep" id="x">content</div>"#);
    let div = doc.select("div");
    let before = doc.html();

    div.set_attr("", "v")
        .set_attr("   ", "v")
        .remove_attr("")
        .add_class(&[""])
        .toggle_class(&["  ", "\t"])
        .find_remove_attr("  ");

    assert_eq!(doc.html(), before);
}

/// Unclosed markup still yields usable selections
#[test]
fn unclosed_markup() {
    let doc = Document::new("<p>text<select><option value=1>one");

    assert_eq!(doc.select("select").val(), "1");
    assert_eq!(doc.select("p").text(), "textone");
}

use html_selection::Document;

/// A checked checkbox without value submits "on"
#[test]
fn checked_checkbox_without_value() {
    let doc = Document::new(r#"<input type="checkbox" checked>"#);

    assert_eq!(doc.select("input").val(), "on");
}

/// The selected option's value wins over the first option
#[test]
fn select_with_selected_option() {
    let doc = Document::new(
        r#"<select><option value="1">A</option><option value="2" selected>B</option></select>"#,
    );

    assert_eq!(doc.select("select").val(), "2");
}

/// An option without value falls back to its inner markup
#[test]
fn select_option_without_value() {
    let doc = Document::new("<select><option>X</option></select>");

    assert_eq!(doc.select("select").val(), "X");
}

/// Scanning a whole form returns the last relevant control
#[test]
fn form_scan_takes_last_control() {
    let doc = Document::new(
        r#"<form>
            <input type="text" name="q" value="rust">
            <input type="checkbox" name="c" value="yes">
            <textarea name="t">Hello <b>world</b></textarea>
            <input type="submit" value="Go">
        </form>"#,
    );

    assert_eq!(doc.select("form").val(), "Hello &lt;b&gt;world&lt;/b&gt;");
}

/// Controls are found among the matched nodes themselves
#[test]
fn matched_controls_are_candidates() {
    let doc = Document::new(
        r#"<input type="hidden" value="h1"><input type="text" value="t2"><input type="button" value="b">"#,
    );

    assert_eq!(doc.select("input").val(), "t2");
}

/// User-entered content keeps its case and whitespace
#[test]
fn value_is_not_normalized() {
    let doc = Document::new(r#"<input type="radio" value=" Option A " checked>"#);

    assert_eq!(doc.select("input").val(), " Option A ");
}

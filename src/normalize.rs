//! Whitespace and case normalization helpers.
//!
//! Pure functions shared by the class-list engine and the media heuristics.
//! The whitespace set is the one browsers use for class tokens and that
//! goquery trims from media attributes: space, tab, CR and LF.

/// Characters treated as whitespace in class lists and media attributes.
pub const MARKUP_WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Returns true for space, tab, CR or LF.
#[inline]
#[must_use]
pub fn is_markup_whitespace(c: char) -> bool {
    MARKUP_WHITESPACE.contains(&c)
}

/// Trims leading and trailing space, tab, CR and LF.
///
/// Unlike [`str::trim`], other Unicode whitespace (e.g. `\u{a0}`) is kept.
#[inline]
#[must_use]
pub fn trim_markup_whitespace(s: &str) -> &str {
    s.trim_matches(is_markup_whitespace)
}

/// Brackets a class attribute value as `" a b "`.
///
/// Tabs, CRs and LFs become spaces and runs of whitespace collapse to a
/// single space, so token membership can be tested with a `" name "`
/// substring search. An empty or all-whitespace value yields `" "`.
#[must_use]
pub fn bracket_classes(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(' ');
    for token in value.split(is_markup_whitespace).filter(|t| !t.is_empty()) {
        out.push_str(token);
        out.push(' ');
    }
    out
}

/// Splits a list of class names into unique-in-order tokens.
///
/// Accepts either one whitespace-separated string or several arguments;
/// `["a b", "c"]` and `["a", "b c"]` tokenize identically.
#[must_use]
pub fn class_tokens<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for name in names {
        for token in name.as_ref().split(is_markup_whitespace) {
            if !token.is_empty() && !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
            }
        }
    }
    tokens
}

/// Splits a space-delimited attribute list into lower-cased names.
///
/// Empty tokens from repeated spaces are skipped.
#[must_use]
pub fn attr_names(names: &str) -> Vec<String> {
    names
        .split(' ')
        .filter(|n| !n.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Trims markup whitespace and optionally lower-cases the result.
#[must_use]
pub fn media_value(value: &str, lowercase: bool) -> String {
    let trimmed = trim_markup_whitespace(value);
    if lowercase {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    }
}

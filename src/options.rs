//! Configuration options attached to a [`Document`](crate::Document).
//!
//! The `Options` struct tunes the few behaviours that callers may reasonably
//! want to change; everything else follows jQuery/goquery semantics.

/// Configuration options for a document and every selection made from it.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use html_selection::{Document, Options};
///
/// let options = Options {
///     lowercase_media: false,
///     ..Options::default()
/// };
/// let doc = Document::with_options(r#"<embed src="Clip.MP4">"#, options);
/// assert_eq!(doc.select("embed").object_src(), "Clip.MP4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Lower-case the values resolved by `mime_type()` and `object_src()`.
    ///
    /// Source URLs are case-sensitive on most servers, so lower-casing them
    /// can break links. It stays on by default for compatibility with
    /// goquery-based consumers that expect the normalized form.
    ///
    /// Default: `true`
    pub lowercase_media: bool,

    /// Separator placed around every text node by `text()`.
    ///
    /// `text_with_separator()` overrides this per call.
    ///
    /// Default: `""`
    pub text_separator: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            lowercase_media: true,
            text_separator: String::new(),
        }
    }
}

//! # html-selection
//!
//! jQuery-style operations over parsed HTML: attribute reads and writes,
//! class-list manipulation, text and markup extraction, and heuristics that
//! recover form control values and embedded media sources.
//!
//! Parsing, CSS selector matching and tree storage come from `dom_query`;
//! this crate adds the operations on top of its selections.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_selection::Document;
//!
//! let doc = Document::new(r#"<p class="intro">Hi <b>there</b></p>"#);
//! let p = doc.select("p");
//!
//! p.add_class(&["lead"]).set_attr("data-id", "7");
//! assert!(p.has_class("lead"));
//! assert_eq!(p.attr("DATA-ID"), Some("7".to_string()));
//! assert_eq!(p.text(), "Hi there");
//! # Ok::<(), html_selection::Error>(())
//! ```
//!
//! ## Semantics
//!
//! - Reads act on the first matched node, writes on every matched node.
//! - Every operation is safe on an empty selection and returns the zero
//!   value (`None`, `""`, `false`) instead of failing.
//! - Attribute names are case-insensitive and may be given as a
//!   space-delimited list.
//! - Only markup rendering can fail; see [`Error`].
//!
//! Documents use interior mutability and are not `Sync`: mutation through
//! one selection is visible through every other selection of the same
//! document.

mod tracing_macros;

mod error;
mod options;

/// Document and selection types.
pub mod dom;

/// Node classification and raw attribute primitives.
pub mod node;

/// Whitespace and case normalization helpers.
pub mod normalize;

/// Markup renderers.
pub mod render;

mod attr;
mod class_list;
mod form;
mod media;
mod text;

// Public API - re-exports
pub use dom::{Document, Selection};
pub use error::{Error, Result};
pub use node::NodeKind;
pub use options::Options;
pub use render::{HtmlRenderer, Render};

pub use dom_query::NodeRef;

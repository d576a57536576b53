//! Embedded media resolution
//!
//! Resolves the mime-type and source of `object`, `embed`, `param` and
//! `iframe` elements through ordered fallback chains. Only the first matched
//! node's tag decides which chain runs; the first non-empty candidate wins.
//!
//! Results are trimmed of space/tab/CR/LF and, unless
//! [`Options::lowercase_media`](crate::Options::lowercase_media) is off,
//! lower-cased. That includes URLs.

use std::sync::LazyLock;

use dom_query::Matcher;

use crate::dom::{compile, Selection};
use crate::normalize::{media_value, trim_markup_whitespace};
use crate::tracing_macros::trace;

type CachedMatcher = LazyLock<Option<Matcher>>;

static PARAM_TYPE: CachedMatcher = LazyLock::new(|| compile("param[type]").ok());
static EMBED_TYPE: CachedMatcher = LazyLock::new(|| compile("embed[type]").ok());
static EMBED_SRC: CachedMatcher = LazyLock::new(|| compile("embed[src]").ok());
static MOVIE: CachedMatcher = LazyLock::new(|| compile("param[name=movie]").ok());

/// Where a candidate value is read from.
#[derive(Debug, Clone, Copy)]
enum Source {
    /// Attribute of the node itself.
    Own(&'static str),
    /// Attribute of the first descendant matching the selector.
    Descendant(&'static CachedMatcher, &'static str),
    /// Attribute of the node itself, only if it matches the selector.
    OwnIf(&'static CachedMatcher, &'static str),
}

static OBJECT_MIME: &[Source] = &[
    Source::Own("codetype"),
    Source::Descendant(&PARAM_TYPE, "type"),
    Source::Descendant(&EMBED_TYPE, "type"),
];

static OBJECT_SRC: &[Source] = &[
    Source::Own("data"),
    Source::Descendant(&MOVIE, "value"),
    Source::Descendant(&EMBED_SRC, "src"),
];

static OWN_TYPE: &[Source] = &[Source::Own("type")];
static OWN_SRC: &[Source] = &[Source::Own("src")];
static MOVIE_PARAM: &[Source] = &[Source::OwnIf(&MOVIE, "value")];

fn mime_chain(tag: &str) -> &'static [Source] {
    match tag {
        "object" => OBJECT_MIME,
        "embed" | "param" => OWN_TYPE,
        _ => &[],
    }
}

fn src_chain(tag: &str) -> &'static [Source] {
    match tag {
        "object" => OBJECT_SRC,
        "embed" | "iframe" => OWN_SRC,
        "param" => MOVIE_PARAM,
        _ => &[],
    }
}

impl<'a> Selection<'a> {
    /// Mime-type of the first node when it is an `object`, `embed` or
    /// `param`.
    ///
    /// For `object` the chain is its `codetype`, then a descendant
    /// `param[type]`, then a descendant `embed[type]`.
    #[must_use]
    pub fn mime_type(&self) -> String {
        let tag = self.first().node_name();
        self.resolve(mime_chain(&tag))
    }

    /// Source address of the first node when it is an `object`, `embed`,
    /// `param` or `iframe`.
    ///
    /// For `object` the chain is its `data`, then a descendant
    /// `param[name=movie]`'s `value`, then a descendant `embed[src]`'s `src`.
    /// A bare `param` only yields its `value` when it is named `movie`.
    #[must_use]
    pub fn object_src(&self) -> String {
        let tag = self.first().node_name();
        self.resolve(src_chain(&tag))
    }

    fn resolve(&self, chain: &[Source]) -> String {
        let first = self.first();
        for source in chain {
            let candidate = match *source {
                Source::Own(attr) => first.attr(attr),
                Source::Descendant(matcher, attr) => LazyLock::force(matcher)
                    .as_ref()
                    .and_then(|m| first.find_matcher(m).attr(attr)),
                Source::OwnIf(matcher, attr) => LazyLock::force(matcher)
                    .as_ref()
                    .and_then(|m| first.filter_matcher(m).attr(attr)),
            };
            let Some(value) = candidate else {
                continue;
            };
            if !trim_markup_whitespace(&value).is_empty() {
                trace!(source = ?source, "media value resolved");
                return media_value(&value, self.doc.options().lowercase_media);
            }
        }
        String::new()
    }
}

//! HTML annotation converter
//!
//! Turns raw HTML fragments from the API reference into text that can be
//! embedded in generated source code.
//!
//! # Prose Pipeline
//!
//! [`AnnotationConverter::to_prose`] runs the fragment through
//! [`PROSE_PIPELINE`], a fixed sequence of string rewrites:
//!
//! 1. **Images**: `<img alt="X">` becomes `X`
//! 2. **Links**: `<a href="H">T</a>` becomes `T --H--`, deferring the href
//! 3. **ResolveLinks**: deferred hrefs become `(URL)`, tried in
//!    [`LINK_RESOLUTION_ORDER`]
//! 4. **BlockBreaks**: opening `p`, `div`, `li`, `blockquote` and `br`
//!    tags become `\n`
//! 5. **StripTags**: every remaining tag is removed
//! 6. **Unescape**: HTML entities are decoded
//! 7. **CollapseWhitespace**: the text is trimmed and every run of ASCII
//!    whitespace shrinks to its first character
//!
//! Each stage expects the previous ones to have run. Links must be
//! rewritten before tags are stripped, and entities must be decoded after
//! stripping so that `&lt;b&gt;` survives as literal text.
//!
//! # Examples
//!
//! ```rust
//! use apidoc_normalizer::annotation::AnnotationConverter;
//! use apidoc_normalizer::options::NormalizerOptions;
//! use apidoc_normalizer::patterns::PatternSet;
//!
//! let options = NormalizerOptions::default().with_base_url("https://t.me");
//! let converter = AnnotationConverter::new(PatternSet::shared().unwrap(), &options);
//!
//! let prose = converter.to_prose(r#"<p>See <a href="/docs/x">here</a>.</p>"#);
//! assert_eq!(prose, "See here (https://t.me/docs/x).");
//!
//! let plain = converter.to_plain_text("<em>Optional</em>. Chat id");
//! assert_eq!(plain, "Optional. Chat id");
//! ```

use log::trace;
use regex::Captures;
use std::sync::Arc;

use crate::options::NormalizerOptions;
use crate::patterns::PatternSet;

/// One rewrite stage of the prose pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProseStage {
    /// Replace image tags with their alt text
    Images,
    /// Replace link tags with `text --href--`
    Links,
    /// Resolve `--href--` markers into `(absolute URL)`
    ResolveLinks,
    /// Replace block-level opening tags with a line break
    BlockBreaks,
    /// Remove all remaining tags
    StripTags,
    /// Decode HTML entities
    Unescape,
    /// Trim and collapse whitespace runs
    CollapseWhitespace,
}

/// Stage order for [`AnnotationConverter::to_prose`]
pub const PROSE_PIPELINE: [ProseStage; 7] = [
    ProseStage::Images,
    ProseStage::Links,
    ProseStage::ResolveLinks,
    ProseStage::BlockBreaks,
    ProseStage::StripTags,
    ProseStage::Unescape,
    ProseStage::CollapseWhitespace,
];

/// Kind of deferred link marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// `--http(s)://...--`, kept as is
    External,
    /// `--/path--`, prefixed with the base URL
    Internal,
    /// `--#anchor--`, prefixed with the documentation URL
    Anchor,
}

/// Marker resolution order. External must precede Internal.
pub const LINK_RESOLUTION_ORDER: [LinkTarget; 3] =
    [LinkTarget::External, LinkTarget::Internal, LinkTarget::Anchor];

/// Converts HTML fragments into prose or plain text
#[derive(Debug, Clone)]
pub struct AnnotationConverter {
    patterns: Arc<PatternSet>,
    base_url: String,
    docs_url: String,
}

impl AnnotationConverter {
    /// Create a converter over a compiled pattern set
    pub fn new(patterns: Arc<PatternSet>, options: &NormalizerOptions) -> Self {
        Self {
            patterns,
            base_url: options.base_url.clone(),
            docs_url: options.docs_url.clone(),
        }
    }

    /// Convert an HTML fragment into readable prose
    ///
    /// Links are kept inline with their absolute URL in parentheses, images
    /// are reduced to their alt text and block-level tags become line
    /// breaks. The result is trimmed and contains no whitespace runs.
    pub fn to_prose(&self, text: &str) -> String {
        let mut text = text.to_string();
        for stage in PROSE_PIPELINE {
            text = self.apply(stage, &text);
            trace!("prose stage {:?}: {:?}", stage, text);
        }
        text
    }

    /// Run a single prose stage
    ///
    /// Stages are meant to run in [`PROSE_PIPELINE`] order; a stage run on
    /// its own sees the input exactly as given.
    ///
    /// # Arguments
    ///
    /// * `stage` - The rewrite to perform
    /// * `text` - Output of the preceding stage, or a raw fragment
    ///
    /// # Returns
    ///
    /// The rewritten text. No stage fails; input a stage does not recognise
    /// is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use apidoc_normalizer::annotation::{AnnotationConverter, ProseStage};
    /// use apidoc_normalizer::options::NormalizerOptions;
    /// use apidoc_normalizer::patterns::PatternSet;
    ///
    /// let converter =
    ///     AnnotationConverter::new(PatternSet::shared().unwrap(), &NormalizerOptions::default());
    ///
    /// let marked = converter.apply(ProseStage::Links, r#"<a href="/x">y</a>"#);
    /// assert_eq!(marked, "y --/x--");
    /// assert_eq!(
    ///     converter.apply(ProseStage::ResolveLinks, &marked),
    ///     "y (https://core.telegram.org/x)"
    /// );
    /// ```
    pub fn apply(&self, stage: ProseStage, text: &str) -> String {
        match stage {
            ProseStage::Images => self.patterns.image.replace_all(text, "$1").into_owned(),
            ProseStage::Links => self
                .patterns
                .link
                .replace_all(text, "$2 --$1--")
                .into_owned(),
            ProseStage::ResolveLinks => self.resolve_links(text),
            ProseStage::BlockBreaks => self.patterns.block_tag.replace_all(text, "\n").into_owned(),
            ProseStage::StripTags => self.patterns.tag.replace_all(text, "").into_owned(),
            ProseStage::Unescape => html_escape::decode_html_entities(text).into_owned(),
            ProseStage::CollapseWhitespace => self.collapse_whitespace(text),
        }
    }

    /// Strip markup, keeping only the text content
    ///
    /// The innermost tag pair around each piece of text is unwrapped in a
    /// single non-greedy pass, then any leftover tag is removed and
    /// entities are decoded. Whitespace is left untouched. Nested tags of
    /// the same kind are only partially unwrapped before the final strip.
    ///
    /// ```rust
    /// use apidoc_normalizer::annotation::AnnotationConverter;
    /// use apidoc_normalizer::options::NormalizerOptions;
    /// use apidoc_normalizer::patterns::PatternSet;
    ///
    /// let converter =
    ///     AnnotationConverter::new(PatternSet::shared().unwrap(), &NormalizerOptions::default());
    /// assert_eq!(
    ///     converter.to_plain_text(r##"Array of <a href="#user">User</a>"##),
    ///     "Array of User"
    /// );
    /// ```
    pub fn to_plain_text(&self, text: &str) -> String {
        let text = self.patterns.tag_element.replace_all(text, "$1");
        let text = self.patterns.tag.replace_all(&text, "");
        html_escape::decode_html_entities(&text).into_owned()
    }

    /// Trim, then shrink every whitespace run to its first character
    pub fn collapse_whitespace(&self, text: &str) -> String {
        self.patterns
            .multi_space
            .replace_all(text.trim(), "$1")
            .into_owned()
    }

    fn resolve_links(&self, text: &str) -> String {
        let mut text = text.to_string();
        for target in LINK_RESOLUTION_ORDER {
            let (pattern, prefix) = match target {
                LinkTarget::External => (&self.patterns.external_url, ""),
                LinkTarget::Internal => (&self.patterns.internal_url, self.base_url.as_str()),
                LinkTarget::Anchor => (&self.patterns.anchor_url, self.docs_url.as_str()),
            };
            text = pattern
                .replace_all(&text, |caps: &Captures| format!("({}{})", prefix, &caps[1]))
                .into_owned();
        }
        text
    }
}

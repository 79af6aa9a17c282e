//! Precompiled matcher set
//!
//! Every pattern the converters use is compiled exactly once into a
//! [`PatternSet`]. The set is immutable after construction and is handed to
//! each component behind an `Arc`, so any number of callers can share it
//! without locking.
//!
//! All patterns are deliberately shallow: `.` never crosses a newline, and
//! the lazy quantifiers make each match stop at the first closing
//! delimiter. Nested tags of the same kind are not supported.

use regex::Regex;
use std::sync::{Arc, OnceLock};

use crate::error::NormalizeError;

/// `<img ... alt="ALT" ...>`, capture 1 is the alt text
const IMAGE: &str = r#"<img.+?alt="(.+?)".*?>"#;

/// `<a ... href="HREF" ...>TEXT</a>`, capture 1 is the href, 2 the text
const LINK: &str = r#"<a.+?href="(.+?)".*?>(.+?)</a>"#;

/// Deferred absolute link marker `--http(s)://...--`
const EXTERNAL_URL: &str = r"--(https?://.+?)--";

/// Deferred root-relative link marker `--/path--`
const INTERNAL_URL: &str = r"--(/.+?)--";

/// Deferred in-page anchor marker `--#anchor--`
const ANCHOR_URL: &str = r"--(#.+?)--";

/// Opening or self-closing block-level tag
const BLOCK_TAG: &str = r"<(?:p|div|li|blockquote|br).*?>";

/// Any tag
const TAG: &str = r"<.+?>";

/// Innermost `<x>INNER</y>` pair, capture 1 is the inner text
const TAG_ELEMENT: &str = r"<.+?>(.+?)</.+?>";

/// An ASCII whitespace character (tab, newline, form feed, carriage return,
/// space) followed by more of them, capture 1 is the first. Non-breaking
/// spaces decoded from `&nbsp;` are text, not whitespace.
const MULTI_SPACE: &str = r"([\t\n\x0C\r ])[\t\n\x0C\r ]+";

/// Compiled patterns shared by all converters
#[derive(Debug)]
pub struct PatternSet {
    pub(crate) image: Regex,
    pub(crate) link: Regex,
    pub(crate) external_url: Regex,
    pub(crate) internal_url: Regex,
    pub(crate) anchor_url: Regex,
    pub(crate) block_tag: Regex,
    pub(crate) tag: Regex,
    pub(crate) tag_element: Regex,
    pub(crate) multi_space: Regex,
}

impl PatternSet {
    /// Compile a fresh pattern set
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::Pattern` if a built-in pattern fails to
    /// compile. This does not happen with a working `regex` build.
    pub fn compile() -> Result<Self, NormalizeError> {
        Ok(Self {
            image: Regex::new(IMAGE)?,
            link: Regex::new(LINK)?,
            external_url: Regex::new(EXTERNAL_URL)?,
            internal_url: Regex::new(INTERNAL_URL)?,
            anchor_url: Regex::new(ANCHOR_URL)?,
            block_tag: Regex::new(BLOCK_TAG)?,
            tag: Regex::new(TAG)?,
            tag_element: Regex::new(TAG_ELEMENT)?,
            multi_space: Regex::new(MULTI_SPACE)?,
        })
    }

    /// Process-wide pattern set, compiled on first use
    pub fn shared() -> Result<Arc<Self>, NormalizeError> {
        static SHARED: OnceLock<Result<Arc<PatternSet>, NormalizeError>> = OnceLock::new();
        SHARED
            .get_or_init(|| PatternSet::compile().map(Arc::new))
            .clone()
    }
}

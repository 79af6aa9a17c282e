//! Normalizer facade
//!
//! [`DocNormalizer`] wires the components together the way the code
//! generator consumes them: description HTML becomes a wrapped comment
//! block, type column HTML becomes a type token and snake_case names become
//! generated identifiers.
//!
//! The matcher set is compiled once in [`DocNormalizer::new`] and shared by
//! every component. The normalizer holds no mutable state and can be used
//! from any number of threads at once.
//!
//! # Examples
//!
//! ```rust
//! use apidoc_normalizer::{DocNormalizer, NormalizerOptions};
//!
//! let normalizer = DocNormalizer::new(NormalizerOptions::default().with_max_line_width(50)).unwrap();
//!
//! let comment = normalizer
//!     .comment(r##"Unique identifier for the target chat.<br>See <a href="#chat">Chat</a>."##, "// ")
//!     .unwrap();
//! assert_eq!(
//!     comment,
//!     "// Unique identifier for the target chat.\n// See Chat\n// (https://core.telegram.org/bots/api#chat)."
//! );
//!
//! assert_eq!(normalizer.map_type("Integer or String", false), "ChatID");
//! assert_eq!(normalizer.type_name("chat_id"), "ChatID");
//! ```

use log::debug;
use std::sync::Arc;

use crate::annotation::AnnotationConverter;
use crate::error::NormalizeError;
use crate::fragment::DocFragment;
use crate::ident;
use crate::options::NormalizerOptions;
use crate::patterns::PatternSet;
use crate::types::{TypeDescriptor, TypeMapper, TypeToken};
use crate::wrap::LineWrapper;

/// Description prefix marking an optional field or parameter
const OPTIONAL_MARKER: &str = "Optional.";

/// Entry point combining all converters under one configuration
#[derive(Debug, Clone)]
pub struct DocNormalizer {
    options: NormalizerOptions,
    annotations: AnnotationConverter,
    types: TypeMapper,
    wrapper: LineWrapper,
}

impl DocNormalizer {
    /// Validate options and compile the matcher set
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::InvalidOption` for rejected options and
    /// `NormalizeError::Pattern` if compilation fails.
    pub fn new(options: NormalizerOptions) -> Result<Self, NormalizeError> {
        options.validate()?;
        let patterns = Arc::new(PatternSet::compile()?);
        Ok(Self::assemble(options, patterns))
    }

    /// Build a normalizer over an existing matcher set
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::InvalidOption` for rejected options.
    pub fn with_patterns(
        options: NormalizerOptions,
        patterns: Arc<PatternSet>,
    ) -> Result<Self, NormalizeError> {
        options.validate()?;
        Ok(Self::assemble(options, patterns))
    }

    fn assemble(options: NormalizerOptions, patterns: Arc<PatternSet>) -> Self {
        debug!(
            "normalizer configured: width={} base={} docs={}",
            options.max_line_width, options.base_url, options.docs_url
        );

        let annotations = AnnotationConverter::new(patterns, &options);
        Self {
            types: TypeMapper::new(annotations.clone()),
            wrapper: LineWrapper::new(options.max_line_width),
            annotations,
            options,
        }
    }

    /// Active options
    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    /// HTML annotation converter
    pub fn annotations(&self) -> &AnnotationConverter {
        &self.annotations
    }

    /// Type descriptor mapper
    pub fn types(&self) -> &TypeMapper {
        &self.types
    }

    /// Line wrapper configured with the maximum width
    pub fn wrapper(&self) -> &LineWrapper {
        &self.wrapper
    }

    /// Fragment as prose
    pub fn prose(&self, fragment: &DocFragment) -> String {
        self.annotations.to_prose(fragment.as_str())
    }

    /// Fragment as plain text
    pub fn plain_text(&self, fragment: &DocFragment) -> String {
        self.annotations.to_plain_text(fragment.as_str())
    }

    /// Description HTML as a wrapped comment block
    ///
    /// Every line of the result starts with `delimiter`.
    ///
    /// Block tags become line breaks and words are split on spaces only, so
    /// a paragraph consisting of a single word sits between two breaks in
    /// one token. Three or more consecutive block-level items where the
    /// inner ones hold a single word, such as
    /// `<p>Note:</p><p>Yes</p><p>done</p>` or `a<br>b<br>c`, therefore
    /// fail instead of wrapping.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::MalformedBreak` if the prose still carries a
    /// token with two line breaks.
    ///
    /// ```rust
    /// use apidoc_normalizer::{DocNormalizer, NormalizeError, NormalizerOptions};
    ///
    /// let normalizer = DocNormalizer::new(NormalizerOptions::default()).unwrap();
    /// let err = normalizer.comment("<p>Note:</p><p>Yes</p><p>done</p>", "// ").unwrap_err();
    /// assert!(matches!(err, NormalizeError::MalformedBreak { segments: 3, .. }));
    /// ```
    pub fn comment(&self, html: &str, delimiter: &str) -> Result<String, NormalizeError> {
        let prose = self.annotations.to_prose(html);
        self.wrapper.fit_to_delimited_lines(&prose, delimiter)
    }

    /// Type column HTML as a type token string
    pub fn map_type(&self, raw: &str, optional: bool) -> String {
        self.types.map_type(raw, optional)
    }

    /// Type column HTML as a structured type token
    pub fn resolve_type(&self, descriptor: &TypeDescriptor) -> TypeToken {
        self.types.resolve(descriptor)
    }

    /// Whether a field description marks the field optional
    pub fn is_optional_description(&self, html: &str) -> bool {
        self.annotations
            .to_plain_text(html)
            .trim_start()
            .starts_with(OPTIONAL_MARKER)
    }

    /// Generated type or method name
    pub fn type_name(&self, raw: &str) -> String {
        ident::type_name(raw)
    }

    /// Generated field name
    pub fn field_name(&self, raw: &str) -> String {
        ident::field_name(raw)
    }
}

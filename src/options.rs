//! Normalizer configuration
//!
//! The three values injected by the documentation harvester: the maximum
//! width of a generated comment line, the site root used to resolve
//! root-relative links, and the documentation page used to resolve
//! in-page anchors.

use crate::error::NormalizeError;

/// Default maximum comment line width
pub const DEFAULT_MAX_LINE_WIDTH: usize = 110;

/// Default site root for root-relative links (`/bots/faq` etc.)
pub const DEFAULT_BASE_URL: &str = "https://core.telegram.org";

/// Default documentation page for in-page anchors (`#sendmessage` etc.)
pub const DEFAULT_DOCS_URL: &str = "https://core.telegram.org/bots/api";

/// Normalization options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerOptions {
    /// Maximum width of a wrapped line, in characters
    pub max_line_width: usize,
    /// Prefix for links of the form `/path`
    pub base_url: String,
    /// Prefix for links of the form `#anchor`
    pub docs_url: String,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            max_line_width: DEFAULT_MAX_LINE_WIDTH,
            base_url: DEFAULT_BASE_URL.to_string(),
            docs_url: DEFAULT_DOCS_URL.to_string(),
        }
    }
}

impl NormalizerOptions {
    /// Set the maximum line width
    pub fn with_max_line_width(mut self, width: usize) -> Self {
        self.max_line_width = width;
        self
    }

    /// Set the base URL for root-relative links
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the documentation URL for anchors
    pub fn with_docs_url(mut self, url: impl Into<String>) -> Self {
        self.docs_url = url.into();
        self
    }

    /// Validate the options
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::InvalidOption` when the width is zero or
    /// either URL ends with `/` (resolved links would contain `//`).
    pub fn validate(&self) -> Result<(), NormalizeError> {
        if self.max_line_width == 0 {
            return Err(NormalizeError::InvalidOption(
                "max_line_width must be at least 1".to_string(),
            ));
        }

        for (name, url) in [("base_url", &self.base_url), ("docs_url", &self.docs_url)] {
            if url.ends_with('/') {
                return Err(NormalizeError::InvalidOption(format!(
                    "{} must not end with '/': {}",
                    name, url
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        let options = NormalizerOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.max_line_width, DEFAULT_MAX_LINE_WIDTH);
    }

    #[test]
    fn test_builder_setters() {
        let options = NormalizerOptions::default()
            .with_max_line_width(80)
            .with_base_url("https://t.me")
            .with_docs_url("https://t.me/api");

        assert_eq!(options.max_line_width, 80);
        assert_eq!(options.base_url, "https://t.me");
        assert_eq!(options.docs_url, "https://t.me/api");
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = NormalizerOptions::default()
            .with_max_line_width(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidOption(_)));
    }

    #[test]
    fn test_trailing_slash_rejected() {
        let err = NormalizerOptions::default()
            .with_base_url("https://t.me/")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("base_url"));

        let err = NormalizerOptions::default()
            .with_docs_url("https://t.me/api/")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("docs_url"));
    }
}

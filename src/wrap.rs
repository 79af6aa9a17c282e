//! Greedy line wrapping for generated comment blocks
//!
//! Text is split on spaces into [`Token`]s. A token that contains a single
//! `\n` is a forced break: its first half ends the current line and its
//! second half starts the next one. Tokens are never split, so a line may
//! only exceed the maximum width when it holds one oversized token.
//!
//! ```rust
//! use apidoc_normalizer::wrap::LineWrapper;
//!
//! let wrapper = LineWrapper::new(20);
//! let block = wrapper
//!     .fit_to_delimited_lines("Use this method to send text messages.", "// ")
//!     .unwrap();
//! assert_eq!(block, "// Use this method\n// to send text\n// messages.");
//! ```

use log::warn;

use crate::error::NormalizeError;

/// A whitespace-delimited unit of wrapping input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Plain word, appended to the current line if it fits
    Word(&'a str),
    /// Word with an embedded line break; `before` closes the current line
    /// and `after` opens the next one. Either half may be empty.
    Break { before: &'a str, after: &'a str },
}

/// Split text into wrapping tokens
///
/// # Errors
///
/// Returns `NormalizeError::MalformedBreak` for a token with more than one
/// line break.
pub fn tokenize(text: &str) -> Result<Vec<Token<'_>>, NormalizeError> {
    text.split(' ')
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once('\n') {
            None => Ok(Token::Word(token)),
            Some((before, after)) if !after.contains('\n') => Ok(Token::Break { before, after }),
            Some(_) => {
                let segments = token.split('\n').count();
                warn!("token {:?} has {} line segments", token, segments);
                Err(NormalizeError::MalformedBreak {
                    token: token.to_string(),
                    segments,
                })
            }
        })
        .collect()
}

/// Greedy word wrapper with a fixed maximum width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWrapper {
    max_width: usize,
}

#[derive(Default)]
struct Line {
    text: String,
    width: usize,
}

impl Line {
    fn push(&mut self, word: &str, width: usize) {
        if !self.text.is_empty() {
            self.text.push(' ');
            self.width += 1;
        }
        self.text.push_str(word);
        self.width += width;
    }

    fn take(&mut self) -> String {
        self.width = 0;
        std::mem::take(&mut self.text)
    }
}

impl LineWrapper {
    /// Create a wrapper; width is counted in characters
    pub fn new(max_width: usize) -> Self {
        Self { max_width }
    }

    /// Maximum line width
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Wrap text into lines of at most `max_width` characters
    pub fn wrap(&self, text: &str) -> Result<Vec<String>, NormalizeError> {
        Ok(self.wrap_tokens(&tokenize(text)?))
    }

    /// Wrap pre-tokenized text
    ///
    /// Words are appended greedily, separated by one space, until the next
    /// one would push the line past the maximum width. A [`Token::Break`]
    /// always ends the line after its `before` half.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Tokens as produced by [`tokenize`]
    ///
    /// # Returns
    ///
    /// The wrapped lines without trailing spaces. A line is only wider than
    /// the maximum when it holds a single oversized word. A break with an
    /// empty line before it yields an empty line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use apidoc_normalizer::wrap::{LineWrapper, Token};
    ///
    /// let tokens = [
    ///     Token::Word("Send"),
    ///     Token::Word("text"),
    ///     Token::Break { before: "now.", after: "Then" },
    ///     Token::Word("stop"),
    /// ];
    /// assert_eq!(
    ///     LineWrapper::new(10).wrap_tokens(&tokens),
    ///     vec!["Send text", "now.", "Then stop"]
    /// );
    /// ```
    pub fn wrap_tokens(&self, tokens: &[Token<'_>]) -> Vec<String> {
        let mut lines = Vec::new();
        let mut line = Line::default();

        for token in tokens {
            match *token {
                Token::Word(word) => self.push_word(&mut lines, &mut line, word),
                Token::Break { before, after } => {
                    if !before.is_empty() {
                        self.push_word(&mut lines, &mut line, before);
                    }
                    lines.push(line.take());
                    if !after.is_empty() {
                        self.push_word(&mut lines, &mut line, after);
                    }
                }
            }
        }

        if !line.text.is_empty() {
            lines.push(line.take());
        }

        lines
    }

    /// Wrap text into a block where every line starts with `delimiter`
    ///
    /// The delimiter counts toward the width of the first line only.
    ///
    /// # Arguments
    ///
    /// * `text` - Prose, usually the output of `AnnotationConverter::to_prose`
    /// * `delimiter` - Comment prefix such as `"// "` or `"\t// "`
    ///
    /// # Returns
    ///
    /// The lines joined with `\n`, each starting with `delimiter`.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::MalformedBreak` if a token of `text` carries
    /// more than one line break.
    pub fn fit_to_delimited_lines(
        &self,
        text: &str,
        delimiter: &str,
    ) -> Result<String, NormalizeError> {
        let lines = self.wrap(&format!("{}{}", delimiter, text))?;
        Ok(lines.join(&format!("\n{}", delimiter)))
    }

    fn push_word(&self, lines: &mut Vec<String>, line: &mut Line, word: &str) {
        let width = word.chars().count();
        if !line.text.is_empty() && line.width + 1 + width > self.max_width {
            lines.push(line.take());
        }
        line.push(word, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ============================================================================
    // Tokenizer
    // ============================================================================

    #[test]
    fn test_tokenize_words_and_breaks() {
        let tokens = tokenize("one two.\nthree  four").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Word("one"),
                Token::Break {
                    before: "two.",
                    after: "three"
                },
                Token::Word("four"),
            ]
        );
    }

    #[test]
    fn test_tokenize_rejects_double_break() {
        let err = tokenize("a b\nc\nd").unwrap_err();
        assert_eq!(
            err,
            NormalizeError::MalformedBreak {
                token: "b\nc\nd".to_string(),
                segments: 3,
            }
        );
    }

    // ============================================================================
    // Wrapping
    // ============================================================================

    #[test]
    fn test_wrap_greedy() {
        let lines = LineWrapper::new(10).wrap("aaa bbb ccc ddd").unwrap();
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_wrap_exact_fit() {
        let lines = LineWrapper::new(7).wrap("aaa bbb ccc").unwrap();
        assert_eq!(lines, vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_wrap_never_splits_long_word() {
        let lines = LineWrapper::new(5).wrap("a abcdefghij b").unwrap();
        assert_eq!(lines, vec!["a", "abcdefghij", "b"]);
    }

    #[test]
    fn test_wrap_forced_break() {
        let lines = LineWrapper::new(80).wrap("First sentence.\nSecond one.").unwrap();
        assert_eq!(lines, vec!["First sentence.", "Second one."]);
    }

    #[test]
    fn test_wrap_forced_break_overflow() {
        let lines = LineWrapper::new(8).wrap("aaaa bbbb\ncc").unwrap();
        assert_eq!(lines, vec!["aaaa", "bbbb", "cc"]);
    }

    #[test]
    fn test_wrap_leading_break_emits_empty_line() {
        let lines = LineWrapper::new(80).wrap("\nx").unwrap();
        assert_eq!(lines, vec!["", "x"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(LineWrapper::new(10).wrap("").unwrap().is_empty());
    }

    #[test]
    fn test_wrap_counts_characters() {
        let lines = LineWrapper::new(5).wrap("éé éé").unwrap();
        assert_eq!(lines, vec!["éé éé"]);
    }

    #[test]
    fn test_wrap_malformed_is_error() {
        assert!(LineWrapper::new(10).wrap("a\nb\nc").is_err());
    }

    // ============================================================================
    // Delimited Blocks
    // ============================================================================

    #[test]
    fn test_fit_to_delimited_lines() {
        let block = LineWrapper::new(12)
            .fit_to_delimited_lines("alpha beta gamma delta", "// ")
            .unwrap();
        assert_eq!(block, "// alpha\n// beta gamma\n// delta");
    }

    #[test]
    fn test_fit_to_delimited_lines_with_break() {
        let block = LineWrapper::new(80)
            .fit_to_delimited_lines("Line one.\nLine two.", "// ")
            .unwrap();
        assert_eq!(block, "// Line one.\n// Line two.");
    }

    #[test]
    fn test_fit_to_delimited_lines_empty_text() {
        let block = LineWrapper::new(80).fit_to_delimited_lines("", "// ").unwrap();
        assert_eq!(block, "//");
    }

    // ============================================================================
    // Property-Based Tests
    // ============================================================================

    proptest! {
        #[test]
        fn prop_lines_fit_unless_single_long_token(
            words in prop::collection::vec("[a-z]{1,15}", 0..30),
            width in 1usize..40,
        ) {
            let lines = LineWrapper::new(width).wrap(&words.join(" ")).unwrap();
            for line in &lines {
                let fits = line.chars().count() <= width;
                let single = !line.contains(' ');
                prop_assert!(fits || single, "line {:?} exceeds {}", line, width);
            }
        }

        #[test]
        fn prop_wrap_preserves_tokens(
            words in prop::collection::vec("[a-z.,]{1,10}", 0..30),
            width in 1usize..40,
        ) {
            let text = words.join(" ");
            let lines = LineWrapper::new(width).wrap(&text).unwrap();
            let rejoined = lines.join(" ");
            prop_assert_eq!(
                rejoined.split_whitespace().collect::<Vec<_>>(),
                text.split_whitespace().collect::<Vec<_>>()
            );
        }

        #[test]
        fn prop_every_delimited_line_starts_with_delimiter(
            words in prop::collection::vec("[a-z]{1,10}", 1..30),
            width in 1usize..40,
        ) {
            let block = LineWrapper::new(width)
                .fit_to_delimited_lines(&words.join(" "), "// ")
                .unwrap();
            for line in block.lines() {
                prop_assert!(line.starts_with("//"));
                prop_assert!(!line[2..].starts_with("//"));
            }
        }
    }
}

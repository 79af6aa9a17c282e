//! Error types for normalization operations

use std::fmt;

/// Errors that can occur while normalizing documentation fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A wrap token carried a forced line break that does not split into
    /// exactly two segments
    MalformedBreak {
        /// The offending token as it appeared in the input
        token: String,
        /// Number of segments the token split into
        segments: usize,
    },
    /// Configuration value rejected by validation
    InvalidOption(String),
    /// A built-in pattern failed to compile
    Pattern(String),
}

impl NormalizeError {
    /// Get numeric error code, stable across releases
    pub fn code(&self) -> u32 {
        match self {
            NormalizeError::MalformedBreak { .. } => 1,
            NormalizeError::InvalidOption(_) => 2,
            NormalizeError::Pattern(_) => 3,
        }
    }
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::MalformedBreak { token, segments } => write!(
                f,
                "Malformed line break in token {:?}: expected 2 segments, found {}",
                token, segments
            ),
            NormalizeError::InvalidOption(msg) => write!(f, "Invalid option: {}", msg),
            NormalizeError::Pattern(msg) => write!(f, "Pattern error: {}", msg),
        }
    }
}

impl std::error::Error for NormalizeError {}

impl From<regex::Error> for NormalizeError {
    fn from(err: regex::Error) -> Self {
        NormalizeError::Pattern(err.to_string())
    }
}

//! Raw documentation fragments
//!
//! A [`DocFragment`] is an immutable piece of HTML cut out of the API
//! reference page by the harvester. Converters only ever read it.

use std::fmt;

/// Immutable raw HTML fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocFragment(String);

impl DocFragment {
    /// Wrap an already decoded fragment
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Borrow the raw HTML
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the raw HTML
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for DocFragment {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for DocFragment {
    fn from(html: &str) -> Self {
        Self(html.to_string())
    }
}

impl AsRef<str> for DocFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

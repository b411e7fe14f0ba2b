//! Search result link.

use std::fmt;

use serde::Serialize;

use crate::sanitize::{sanitize_title, sanitize_url_with};

/// A search result: canonical target URL and display title.
///
/// Holds no reference into the parsed tree it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    pub url: String,
    pub title: String,
}

impl Link {
    /// Build a link from an already-canonical URL and title.
    pub fn from_parts(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }

    /// Build a link from a raw `href` and raw title text, sanitizing both.
    pub fn new(raw_href: &str, raw_title: &str) -> Self {
        Self::with_prefix(raw_href, raw_title, crate::sanitize::REDIRECT_PREFIX)
    }

    /// Like [`Link::new`], with a site-specific redirect prefix.
    pub fn with_prefix(raw_href: &str, raw_title: &str, prefix: &str) -> Self {
        Self {
            url: sanitize_url_with(raw_href, prefix),
            title: sanitize_title(raw_title),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Link:url={},title={}", self.url, self.title)
    }
}

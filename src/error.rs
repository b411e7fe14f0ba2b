//! Error types for serplinks operations.

use thiserror::Error;

/// Errors surfaced while fetching or reading a results page.
///
/// A heading that resolves to no link is not an error: it is skipped.
#[derive(Error, Debug)]
pub enum Error {
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("fetch failed: {url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("HTML parsing error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error came from the fetch step.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Error::Fetch(_) | Error::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

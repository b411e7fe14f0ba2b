//! Fetching a results page for a query.
//!
//! The fetch step is pluggable through [`Fetcher`] so extraction can run
//! against fixed HTML in tests. [`HttpFetcher`] is the network implementation.

use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::blocking::Client;

use crate::document::{Document, ExtractConfig};
use crate::error::{Error, Result};

/// Search endpoint the query is appended to.
pub const DEFAULT_BASE_URL: &str = "https://www.google.com/search?q=";

/// Desktop browser user agent; the results page serves its plain markup to it.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Bytes left unescaped in a query component, besides ASCII alphanumerics.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Build the results page URL for `query`.
///
/// The query is form-escaped: spaces become `+` and everything outside
/// `A-Za-z0-9-_.~` is percent-encoded.
///
/// ```
/// use serplinks::fetch::search_url;
///
/// assert_eq!(
///     search_url("https://www.google.com/search?q=", "test driven development"),
///     "https://www.google.com/search?q=test+driven+development"
/// );
/// ```
pub fn search_url(base: &str, query: &str) -> String {
    let mut url = String::with_capacity(base.len() + query.len() * 3);
    url.push_str(base);
    for (i, word) in query.split(' ').enumerate() {
        if i > 0 {
            url.push('+');
        }
        url.extend(utf8_percent_encode(word, QUERY_COMPONENT));
    }
    url
}

/// Source of raw results page HTML.
pub trait Fetcher {
    /// GET `url` and return the response body as text.
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F> Fetcher for F
where
    F: Fn(&str) -> Result<String>,
{
    fn fetch(&self, url: &str) -> Result<String> {
        self(url)
    }
}

/// HTTP settings for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FetchConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Blocking HTTP fetcher.
///
/// No retries: a failed request or a non-success status is returned as an error.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "fetching results page");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text()?;
        tracing::debug!(bytes = body.len(), "results page received");
        Ok(body)
    }
}

/// Fetch the results page for `query` from `base_url` and extract its links.
pub fn search<F: Fetcher + ?Sized>(
    query: &str,
    base_url: &str,
    fetcher: &F,
    config: &ExtractConfig,
) -> Result<Document> {
    let url = search_url(base_url, query);
    let html = fetcher.fetch(&url)?;
    Document::parse(html, config)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::link::Link;

    #[test]
    fn test_search_url_escaping() {
        let base = DEFAULT_BASE_URL;
        assert_eq!(search_url(base, ""), base);
        assert_eq!(search_url(base, "rust"), format!("{base}rust"));
        assert_eq!(search_url(base, "a b"), format!("{base}a+b"));
        assert_eq!(search_url(base, "c++ & go?"), format!("{base}c%2B%2B+%26+go%3F"));
        assert_eq!(search_url(base, "x-y_z.w~"), format!("{base}x-y_z.w~"));
        assert_eq!(search_url(base, "café"), format!("{base}caf%C3%A9"));
        assert_eq!(search_url(base, "a/b=c"), format!("{base}a%2Fb%3Dc"));
    }

    #[test]
    fn test_search_with_fixture_fetcher() {
        let requested = RefCell::new(Vec::new());
        let fetcher = |url: &str| -> Result<String> {
            requested.borrow_mut().push(url.to_string());
            Ok(r#"<a href="/url?q=https://example.com/&sa=U"><h3>Example</h3></a>"#.to_string())
        };

        let doc = search("hello world", "http://search.test/?q=", &fetcher, &ExtractConfig::default())
            .unwrap();
        assert_eq!(doc.links(), [Link::from_parts("https://example.com/", "Example")]);
        assert_eq!(*requested.borrow(), ["http://search.test/?q=hello+world"]);
    }

    #[test]
    fn test_search_propagates_fetch_error() {
        let fetcher = |url: &str| -> Result<String> {
            Err(Error::Status {
                status: 503,
                url: url.to_string(),
            })
        };
        let err = search("q", DEFAULT_BASE_URL, &fetcher, &ExtractConfig::default()).unwrap_err();
        assert!(err.is_fetch());
        assert_eq!(
            err.to_string(),
            "fetch failed: https://www.google.com/search?q=q returned HTTP 503"
        );
    }

    #[test]
    fn test_http_fetcher_builds() {
        let config = FetchConfig::default()
            .with_user_agent("serplinks-test")
            .with_timeout(Duration::from_secs(1))
            .with_base_url("http://localhost/?q=");
        assert_eq!(config.base_url, "http://localhost/?q=");
        assert!(HttpFetcher::new(&config).is_ok());
    }

    #[test]
    fn test_http_fetcher_connection_error() {
        // port 9 on localhost: nothing listens, the connect fails fast
        let fetcher = HttpFetcher::new(&FetchConfig::default().with_timeout(Duration::from_secs(2)))
            .unwrap();
        let err = fetcher.fetch("http://127.0.0.1:9/search?q=x").unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
    }
}

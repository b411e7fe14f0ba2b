//! Document assembly: raw HTML in, ordered result links out.

use crate::dom::parse_html;
use crate::error::{Error, Result};
use crate::link::Link;
use crate::locate::{AriaHidden, HeadingLocator};
use crate::resolve::{LINK_TAG, LINK_TARGET_ATTR, first_text, resolve_href};
use crate::sanitize::REDIRECT_PREFIX;

/// Extraction settings.
///
/// The defaults describe the results page markup: `h3` headings wrapped in
/// `a[href]` elements whose targets carry the `/url?q=` redirect wrapper.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub locator: HeadingLocator,
    pub link_tag: String,
    pub target_attr: String,
    pub redirect_prefix: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            locator: HeadingLocator::default(),
            link_tag: LINK_TAG.to_string(),
            target_attr: LINK_TARGET_ATTR.to_string(),
            redirect_prefix: REDIRECT_PREFIX.to_string(),
        }
    }
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locator(mut self, locator: HeadingLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Shorthand for changing only the locator's accessibility policy.
    pub fn with_aria_hidden(mut self, policy: AriaHidden) -> Self {
        self.locator = self.locator.with_aria_hidden(policy);
        self
    }

    pub fn with_link_tag(mut self, tag: impl Into<String>) -> Self {
        self.link_tag = tag.into();
        self
    }

    pub fn with_target_attr(mut self, attr: impl Into<String>) -> Self {
        self.target_attr = attr.into();
        self
    }

    pub fn with_redirect_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.redirect_prefix = prefix.into();
        self
    }
}

/// A results page and the links extracted from it.
///
/// Built once and immutable afterwards. The parsed tree is dropped at the end
/// of construction; only the input text and the links are kept.
#[derive(Debug, Clone)]
pub struct Document {
    html: String,
    links: Vec<Link>,
    parse_errors: usize,
}

impl Document {
    /// Extract links from `html` with the given settings.
    pub fn parse(html: impl Into<String>, config: &ExtractConfig) -> Result<Self> {
        let html = html.into();
        let parsed = parse_html(&html);
        let dom = &parsed.dom;

        let mut links = Vec::new();
        let mut skipped = 0usize;
        for heading in config.locator.locate(dom, dom.document()) {
            let Some(href) = resolve_href(dom, heading, &config.link_tag, &config.target_attr)
            else {
                skipped += 1;
                tracing::debug!(node = heading.0, "heading has no link target, skipping");
                continue;
            };
            let title = first_text(dom, heading);
            links.push(Link::with_prefix(href, title, &config.redirect_prefix));
        }

        tracing::debug!(
            links = links.len(),
            skipped,
            parse_errors = parsed.parse_errors,
            "assembled document"
        );

        Ok(Self {
            html,
            links,
            parse_errors: parsed.parse_errors,
        })
    }

    /// Decode `bytes` as UTF-8 and extract links from it.
    ///
    /// Fails with [`Error::Parse`] when the bytes are not valid UTF-8.
    pub fn from_bytes(bytes: &[u8], config: &ExtractConfig) -> Result<Self> {
        let html = std::str::from_utf8(bytes)
            .map_err(|e| Error::Parse(format!("input is not valid UTF-8: {e}")))?;
        Self::parse(html, config)
    }

    /// The original input text.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Extracted links in document order of their headings.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn into_links(self) -> Vec<Link> {
        self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Number of malformed-markup errors the parser recovered from.
    pub fn parse_errors(&self) -> usize {
        self.parse_errors
    }
}

/// Extract links from `html` with [`ExtractConfig::default`].
///
/// ```
/// let html = r#"<a href="/url?q=https://example.com/&sa=U"><h3>Example
///     Domain</h3></a>"#;
/// let doc = serplinks::build_document(html).unwrap();
/// assert_eq!(doc.links()[0].url, "https://example.com/");
/// assert_eq!(doc.links()[0].title, "Example Domain");
/// ```
pub fn build_document(html: &str) -> Result<Document> {
    build_document_with(html, &ExtractConfig::default())
}

/// Extract links from `html` with the given settings.
pub fn build_document_with(html: &str, config: &ExtractConfig) -> Result<Document> {
    Document::parse(html, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let doc = build_document("").expect("empty input parses");
        assert!(doc.is_empty());
        assert_eq!(doc.html(), "");
    }

    #[test]
    fn test_order_and_skips() {
        let html = r#"
            <div><a href="/url?q=https://one.example/&sa=U"><h3>One</h3></a></div>
            <div><h3>No link</h3></div>
            <div><a href=""><h3>Empty href</h3></a></div>
            <div><a href="https://two.example/?a=1&b=2"><div><h3><b>Bold</b> title</h3></div></a></div>
            <div><a href="/url?q=https://three.example/"><h3>
                Three
            </h3></a></div>
        "#;
        let doc = build_document(html).unwrap();
        assert_eq!(
            doc.links(),
            [
                Link::from_parts("https://one.example/", "One"),
                Link::from_parts("https://two.example/?a=1", ""),
                Link::from_parts("https://three.example/", "Three"),
            ]
        );
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.html(), html);
    }

    #[test]
    fn test_duplicate_links_are_kept() {
        let html = r#"<a href="/x"><h3>A</h3></a><a href="/x"><h3>A</h3></a>"#;
        let doc = build_document(html).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.links()[0], doc.links()[1]);
    }

    #[test]
    fn test_aria_hidden_policy() {
        let html = r#"<a href="/url?q=https://a.example"><h3>A</h3><h3 aria-hidden="true">A</h3></a>"#;
        assert_eq!(build_document(html).unwrap().len(), 1);

        let config = ExtractConfig::new().with_aria_hidden(AriaHidden::Include);
        assert_eq!(build_document_with(html, &config).unwrap().len(), 2);
    }

    #[test]
    fn test_custom_markup() {
        let html = r#"<article data-target="/l/?uddg=https://duck.example&rut=1"><h2>Duck</h2></article>"#;
        let config = ExtractConfig::new()
            .with_locator(HeadingLocator::new("h2"))
            .with_link_tag("article")
            .with_target_attr("data-target")
            .with_redirect_prefix("/l/?uddg=");
        let doc = build_document_with(html, &config).unwrap();
        assert_eq!(doc.into_links(), [Link::from_parts("https://duck.example", "Duck")]);
    }

    #[test]
    fn test_from_bytes() {
        let config = ExtractConfig::default();
        let doc = Document::from_bytes(br#"<a href="/y"><h3>Y</h3></a>"#, &config).unwrap();
        assert_eq!(doc.links(), [Link::from_parts("/y", "Y")]);

        let err = Document::from_bytes(b"<h3>\xff\xfe</h3>", &config).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}

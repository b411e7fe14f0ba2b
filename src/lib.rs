//! # serplinks
//!
//! Extract result links (URL + title) from search engine results pages.
//!
//! ## Pipeline
//!
//! 1. The page is parsed with html5ever into an arena tree ([`dom`]).
//! 2. A depth-first walk picks out result headings ([`locate`]).
//! 3. Each heading is resolved to its nearest enclosing hyperlink and its
//!    first text child ([`resolve`]).
//! 4. The URL loses its redirect wrapper and tracking parameters and the title
//!    gets its whitespace normalized ([`sanitize`]).
//! 5. The resulting [`Link`]s are collected, in heading order, into a
//!    [`Document`].
//!
//! Headings with no resolvable link are skipped silently.
//!
//! ## Quick Start
//!
//! ```
//! use serplinks::build_document;
//!
//! let html = r#"
//!     <div><a href="/url?q=https://www.rust-lang.org/&sa=U&ved=x">
//!         <h3>Rust Programming
//!             Language</h3>
//!     </a></div>
//!     <div><h3>Related searches</h3></div>
//! "#;
//!
//! let doc = build_document(html).unwrap();
//! assert_eq!(doc.len(), 1);
//! assert_eq!(doc.links()[0].url, "https://www.rust-lang.org/");
//! assert_eq!(doc.links()[0].title, "Rust Programming Language");
//! ```
//!
//! Fetching a live page goes through a [`fetch::Fetcher`]; any
//! `Fn(&str) -> Result<String>` closure works as one:
//!
//! ```
//! use serplinks::{ExtractConfig, fetch};
//!
//! let canned = |_url: &str| -> serplinks::Result<String> {
//!     Ok(r#"<a href="/url?q=https://example.com/"><h3>Example</h3></a>"#.into())
//! };
//! let doc = fetch::search("example", fetch::DEFAULT_BASE_URL, &canned, &ExtractConfig::default())
//!     .unwrap();
//! assert_eq!(doc.links()[0].url, "https://example.com/");
//! ```

pub mod document;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod link;
pub mod locate;
pub mod resolve;
pub mod sanitize;

pub use document::{Document, ExtractConfig, build_document, build_document_with};
pub use error::{Error, Result};
pub use fetch::{FetchConfig, Fetcher, HttpFetcher, search};
pub use link::Link;
pub use locate::{AriaHidden, HeadingLocator};

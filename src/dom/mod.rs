//! Parsed HTML tree.
//!
//! Markup is parsed with html5ever into an index-based [`ArenaDom`]. The tree
//! is read through pull-based iterators: [`descendants`] for the depth-first
//! walk and [`ancestors`] for the upward walk.

mod arena;
mod outline;
mod traverse;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute, find_attr};
pub use outline::outline;
pub use traverse::{Ancestors, Descendants, ancestors, descendants};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use tree_sink::ArenaSink;

/// Output of [`parse_html`].
#[derive(Debug)]
pub struct ParsedHtml {
    /// The parsed tree.
    pub dom: ArenaDom,
    /// Number of malformed-markup errors the parser recovered from.
    pub parse_errors: usize,
}

/// Parse an HTML document.
///
/// HTML5 parsing is total: malformed markup is repaired following the
/// standard tree-construction rules and every input yields a tree, the empty
/// string included.
pub fn parse_html(html: &str) -> ParsedHtml {
    let sink = parse_document(ArenaSink::new(), ParseOpts::default()).one(html);
    let (dom, parse_errors) = sink.into_parts();
    tracing::trace!(nodes = dom.len(), parse_errors, "parsed html");
    ParsedHtml { dom, parse_errors }
}

//! Resolve a result heading to its link target and raw title.

use crate::dom::{ArenaDom, ArenaNodeId, ancestors};

/// Tag of the hyperlink element governing a heading.
pub const LINK_TAG: &str = "a";

/// Attribute holding the link target.
pub const LINK_TARGET_ATTR: &str = "href";

/// Find the nearest element named `link_tag` at or above `heading` and return
/// its `target_attr` value.
///
/// The walk only ever goes upward, so the first match is the nearest one and
/// the search stops there: if that element has no target, or an empty one,
/// the heading is unresolved even when a farther ancestor would qualify.
pub fn resolve_href<'a>(
    dom: &'a ArenaDom,
    heading: ArenaNodeId,
    link_tag: &str,
    target_attr: &str,
) -> Option<&'a str> {
    let anchor = ancestors(dom, heading).find(|&id| dom.is_element_named(id, link_tag))?;
    dom.get_attr(anchor, target_attr).filter(|href| !href.is_empty())
}

/// Raw text of the heading's first child, or `""` when that child is missing
/// or not a text node.
pub fn first_text(dom: &ArenaDom, heading: ArenaNodeId) -> &str {
    dom.first_child(heading)
        .and_then(|child| dom.text_content(child))
        .unwrap_or_default()
}

//! Pull-based tree walks.
//!
//! Both iterators borrow the tree and keep a single cursor, so a consumer may
//! stop at any point without cleanup.

use super::arena::{ArenaDom, ArenaNodeId};

/// Depth-first pre-order walk of the nodes below `root`.
///
/// `root` itself is not yielded. Children are visited left to right before
/// the next sibling of their parent.
pub fn descendants(dom: &ArenaDom, root: ArenaNodeId) -> Descendants<'_> {
    Descendants {
        dom,
        root,
        next: dom.first_child(root),
    }
}

/// Walk from `node` up to the document root, starting with `node` itself.
pub fn ancestors(dom: &ArenaDom, node: ArenaNodeId) -> Ancestors<'_> {
    Ancestors {
        dom,
        next: dom.get(node).map(|_| node),
    }
}

/// Iterator returned by [`descendants`].
#[derive(Clone)]
pub struct Descendants<'a> {
    dom: &'a ArenaDom,
    root: ArenaNodeId,
    next: Option<ArenaNodeId>,
}

impl Descendants<'_> {
    /// Successor of `id` in pre-order, bounded by the subtree of `self.root`.
    fn successor(&self, id: ArenaNodeId) -> Option<ArenaNodeId> {
        if let Some(child) = self.dom.first_child(id) {
            return Some(child);
        }
        let mut current = id;
        while current != self.root {
            if let Some(sibling) = self.dom.next_sibling(current) {
                return Some(sibling);
            }
            current = self.dom.parent(current)?;
        }
        None
    }
}

impl Iterator for Descendants<'_> {
    type Item = ArenaNodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.successor(id);
        Some(id)
    }
}

impl std::iter::FusedIterator for Descendants<'_> {}

/// Iterator returned by [`ancestors`].
#[derive(Clone)]
pub struct Ancestors<'a> {
    dom: &'a ArenaDom,
    next: Option<ArenaNodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ArenaNodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.dom.parent(id);
        Some(id)
    }
}

impl std::iter::FusedIterator for Ancestors<'_> {}

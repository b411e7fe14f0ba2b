//! Indented text rendering of a parsed tree, for inspecting result-page markup.

use std::fmt::Write;

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId};

const INDENT: &str = "  ";

/// Render the tree as one line per element tag and text node.
///
/// Elements print as `<tag key="value">` / `</tag>`, text nodes print their raw
/// content, and comments and doctypes are skipped. Contents of `script`
/// elements are not descended into.
pub fn outline(dom: &ArenaDom) -> String {
    let mut out = String::new();
    for child in dom.children(dom.document()) {
        write_node(dom, child, 0, &mut out);
    }
    out
}

fn write_node(dom: &ArenaDom, id: ArenaNodeId, depth: usize, out: &mut String) {
    let Some(node) = dom.get(id) else {
        return;
    };
    match &node.data {
        ArenaNodeData::Element { name, attrs } => {
            let tag = name.local.as_ref();
            out.push_str(&INDENT.repeat(depth));
            out.push('<');
            out.push_str(tag);
            for attr in attrs {
                let _ = write!(out, " {}={:?}", attr.key(), attr.value);
            }
            out.push_str(">\n");
            if tag != "script" {
                for child in dom.children(id) {
                    write_node(dom, child, depth + 1, out);
                }
            }
            out.push_str(&INDENT.repeat(depth));
            let _ = writeln!(out, "</{tag}>");
        }
        ArenaNodeData::Text(text) => {
            out.push_str(&INDENT.repeat(depth));
            out.push_str(text);
            out.push('\n');
        }
        ArenaNodeData::Document => {
            for child in dom.children(id) {
                write_node(dom, child, depth, out);
            }
        }
        ArenaNodeData::Comment(_) | ArenaNodeData::Doctype { .. } => {}
    }
}

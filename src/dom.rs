//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the traversal,
//! transformer and refresh passes. Everything here works on single nodes
//! (`NodeRef`) because the outline passes need text nodes, which CSS
//! selections never return.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::error::{Error, Result};

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Selection holding just the document node.
#[inline]
#[must_use]
pub fn document_root(doc: &Document) -> Selection<'_> {
    Selection::from(doc.root())
}

/// Resolve the roots to outline: every match of `selector` in document
/// order, or the `<body>` (the whole document when there is none).
///
/// `<head>` is left out by default because `<title>` only holds raw text.
pub fn select_roots<'a>(doc: &'a Document, selector: Option<&str>) -> Result<Selection<'a>> {
    match selector {
        None => Ok(doc
            .try_select("body")
            .unwrap_or_else(|| document_root(doc))),
        Some(css) => doc
            .try_select(css)
            .ok_or_else(|| Error::InvalidSelector(css.to_string())),
    }
}

// === Node Information ===

/// First node of a selection.
#[inline]
#[must_use]
pub fn first_node<'a>(sel: &Selection<'a>) -> Option<NodeRef<'a>> {
    sel.nodes().first().cloned()
}

/// Get tag name (lowercase). `None` for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if node.is_element() {
        node.node_name().map(|t| t.to_ascii_lowercase())
    } else {
        None
    }
}

/// Value of a text node. For elements this is all descendant text.
///
/// Returns `StrTendril`; cloning it is O(1).
#[inline]
#[must_use]
pub fn text_value(node: &NodeRef) -> StrTendril {
    node.text()
}

/// All child nodes, including text nodes.
#[inline]
#[must_use]
pub fn child_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
}

/// Element children only.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

// === Tree Manipulation ===

/// Create a detached `<span>` in the same tree as `anchor`.
#[inline]
#[must_use]
pub fn new_span<'a>(anchor: &NodeRef<'a>) -> NodeRef<'a> {
    anchor.tree.new_element("span")
}

/// Create a detached text node in the same tree as `anchor`.
#[inline]
#[must_use]
pub fn new_text<'a>(anchor: &NodeRef<'a>, text: StrTendril) -> NodeRef<'a> {
    anchor.tree.new_text(text)
}

// === Serialization ===

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

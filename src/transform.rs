//! Text node transformer.
//!
//! Rewrites one text node into an outline unit:
//!
//! ```html
//! <span class="outline-text">
//!   <span class="original">[moved text node]</span>
//!   <span class="clone" aria-hidden="true">[copied text]</span>
//! </span>
//! ```
//!
//! The wrapper is inserted while the text node is still attached, so the
//! text node serves as the insertion anchor. Moving the text node first
//! would leave nothing to insert before.

use dom_query::{NodeId, NodeRef};
use tracing::trace;

use crate::dom;
use crate::error::{Error, Result};
use crate::kind::NodeKind;
use crate::style;

/// Node ids of one outline unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineUnit {
    /// `span.outline-text`
    pub wrapper: NodeId,
    /// `span.original`
    pub original: NodeId,
    /// `span.clone`
    pub clone: NodeId,
    /// The relocated text node, same id as before the rewrite.
    pub text: NodeId,
}

/// Wrap a single attached text node in place.
///
/// Fails with [`Error::DetachedNode`] when the node has no parent. There is
/// no rollback; a failure leaves the tree as it was because the parent
/// check runs before any mutation.
pub fn wrap_text_node(text: &NodeRef) -> Result<OutlineUnit> {
    let raw = dom::text_value(text);
    if text.parent().is_none() {
        return Err(Error::DetachedNode);
    }

    let wrapper = dom::new_span(text);
    NodeKind::OutlineText.mark(&wrapper);
    text.insert_before(&wrapper);

    let original = dom::new_span(text);
    NodeKind::Original.mark(&original);
    text.remove_from_parent();
    original.append_child(text);

    let clone = dom::new_span(text);
    NodeKind::Clone.mark(&clone);
    clone.set_attr("aria-hidden", "true");
    let copy = dom::new_text(text, raw);
    clone.append_child(&copy);

    wrapper.append_child(&original);
    wrapper.append_child(&clone);

    style::style_wrapper(&wrapper);
    style::style_original(&original);

    trace!(wrapper = ?wrapper.id, "wrapped text node");

    Ok(OutlineUnit {
        wrapper: wrapper.id,
        original: original.id,
        clone: clone.id,
        text: text.id,
    })
}

/// Wrap every node in order. Stops at the first failure.
pub fn wrap_all(nodes: &[NodeRef]) -> Result<Vec<OutlineUnit>> {
    nodes.iter().map(wrap_text_node).collect()
}

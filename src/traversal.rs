//! Text node discovery.
//!
//! Pre-order, depth-first, left-to-right walk that yields every text node
//! eligible for outlining. The walk completes before any mutation, so the
//! result is a snapshot of the tree as it was at call time.

use dom_query::{NodeRef, Selection};

use crate::dom;
use crate::kind::{NodeKind, Skip};

/// Collect eligible text nodes under every root, roots in selection order.
///
/// A text node is eligible when it has a non-whitespace character, no
/// ancestor on the walk matched the skip set, and its direct parent is not
/// an `original` container.
#[must_use]
pub fn collect_text_nodes<'a>(roots: &Selection<'a>) -> Vec<NodeRef<'a>> {
    let mut result = Vec::new();
    for root in roots.nodes() {
        walk(root, &mut result);
    }
    result
}

fn walk<'a>(node: &NodeRef<'a>, result: &mut Vec<NodeRef<'a>>) {
    if node.is_text() {
        if is_eligible_text(node) {
            result.push(node.clone());
        }
        return;
    }

    if node.is_element() && Skip::of(node).is_some() {
        return;
    }

    // Elements, plus document/fragment containers; comments and doctypes
    // have no children.
    for child in dom::child_nodes(node) {
        walk(&child, result);
    }
}

/// Eligibility rule for a single text node.
///
/// Only the direct parent is checked for `original`; text nested deeper
/// inside an original container is reached only if the walk was started
/// below the skip-set boundary.
#[must_use]
pub fn is_eligible_text(node: &NodeRef) -> bool {
    if !has_visible_text(&dom::text_value(node)) {
        return false;
    }
    !node
        .parent()
        .is_some_and(|p| NodeKind::of(&p) == Some(NodeKind::Original))
}

/// True if the value has at least one character outside [`is_blank`].
#[inline]
#[must_use]
pub fn has_visible_text(value: &str) -> bool {
    value.chars().any(|c| !is_blank(c))
}

/// Whitespace as matched by `\s` in browser regular expressions: the
/// Unicode space separators, line terminators and U+FEFF. U+0085 is not
/// included.
#[must_use]
pub fn is_blank(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

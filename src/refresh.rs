//! Stroke refresh.
//!
//! Re-applies stroke declarations to every clone container that sits
//! directly inside an outline wrapper. Only the clone's `style` attribute
//! changes; structure is never touched.

use dom_query::{NodeRef, Selection};

use crate::dom;
use crate::kind::NodeKind;
use crate::style::{self, Stroke};

/// Clone containers below the roots, in document order.
///
/// Only descendants are searched; a root that is itself a clone is not.
#[must_use]
pub fn find_clones<'a>(roots: &Selection<'a>) -> Vec<NodeRef<'a>> {
    let mut clones = Vec::new();
    for root in roots.nodes() {
        for child in dom::element_children(root) {
            collect(&child, &mut clones);
        }
    }
    clones
}

fn collect<'a>(node: &NodeRef<'a>, clones: &mut Vec<NodeRef<'a>>) {
    if is_wrapped_clone(node) {
        clones.push(node.clone());
    }
    for child in dom::element_children(node) {
        collect(&child, clones);
    }
}

/// `span.outline-text > span.clone`
fn is_wrapped_clone(node: &NodeRef) -> bool {
    NodeKind::of(node) == Some(NodeKind::Clone)
        && node
            .parent()
            .is_some_and(|p| NodeKind::of(&p) == Some(NodeKind::OutlineText))
}

/// Apply `stroke` to every wrapped clone under the roots. Returns how many
/// clones were updated.
pub fn update_clones(roots: &Selection, stroke: &Stroke) -> usize {
    let clones = find_clones(roots);
    for clone in &clones {
        style::apply_stroke(clone, stroke);
    }
    clones.len()
}

//! Node classification.
//!
//! The three containers built by the transformer, and the closed skip set
//! that traversal prunes. These are the only places the outline class names
//! and the verbatim tag names appear.

use dom_query::NodeRef;

use crate::dom;

/// A container synthesized by the transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `span.outline-text`, the wrapper of one outline unit.
    OutlineText,
    /// `span.original`, holds the relocated text node (fill layer).
    Original,
    /// `span.clone`, holds the copied text (stroke layer).
    Clone,
}

impl NodeKind {
    /// All kinds, in the order they are tested.
    pub const ALL: [Self; 3] = [Self::OutlineText, Self::Original, Self::Clone];

    /// Class token carried by nodes of this kind.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::OutlineText => "outline-text",
            Self::Original => "original",
            Self::Clone => "clone",
        }
    }

    /// Classify a node by its class tokens.
    #[must_use]
    pub fn of(node: &NodeRef) -> Option<Self> {
        if !node.is_element() {
            return None;
        }
        Self::ALL.into_iter().find(|kind| node.has_class(kind.class_name()))
    }

    /// Stamp a freshly created container with this kind.
    pub fn mark(self, node: &NodeRef) {
        node.add_class(self.class_name());
    }
}

/// Elements whose text is taken verbatim and must never be outlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbatimTag {
    Script,
    Style,
    Textarea,
    Noscript,
    Code,
    Pre,
}

impl VerbatimTag {
    /// Match a lowercase tag name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "script" => Some(Self::Script),
            "style" => Some(Self::Style),
            "textarea" => Some(Self::Textarea),
            "noscript" => Some(Self::Noscript),
            "code" => Some(Self::Code),
            "pre" => Some(Self::Pre),
            _ => None,
        }
    }
}

/// Why traversal prunes an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skip {
    /// Verbatim/code container.
    Verbatim(VerbatimTag),
    /// Part of an outline unit built by an earlier run.
    Outline(NodeKind),
}

impl Skip {
    /// Classify an element once. `None` means traversal descends into it.
    #[must_use]
    pub fn of(node: &NodeRef) -> Option<Self> {
        if let Some(tag) = dom::tag_name(node).as_deref().and_then(VerbatimTag::from_tag) {
            return Some(Self::Verbatim(tag));
        }
        NodeKind::of(node).map(Self::Outline)
    }
}

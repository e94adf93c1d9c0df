//! Outline pipeline.
//!
//! Per root, in caller order: traversal, then the transformer for every
//! newly eligible text node, then refresh over the whole root. Roots that
//! were already outlined yield no eligible text, so a repeat run only
//! refreshes strokes.
//!
//! The pipeline mutates the tree in several steps per text node and is not
//! reentrant. `Document` is not `Sync`, so concurrent runs on one document
//! are rejected at compile time; callers must still not mutate the tree from
//! inside a run.

use tracing::debug;

use crate::dom::{self, Document, Selection};
use crate::error::Result;
use crate::options::Options;
use crate::refresh;
use crate::result::{OutlineReport, OutlineResult};
use crate::transform;
use crate::traversal;

/// Run the pipeline over each root and return the counts.
pub fn apply_outline_report(roots: &Selection, options: &Options) -> Result<OutlineReport> {
    let stroke = options.stroke();
    let mut report = OutlineReport::default();

    for root in roots.nodes() {
        let root = Selection::from(root.clone());

        // Snapshot first: wrapping never runs while the walk is in progress.
        let nodes = traversal::collect_text_nodes(&root);
        let units = transform::wrap_all(&nodes)?;
        report.wrapped += units.len();

        report.refreshed += refresh::update_clones(&root, &stroke);
    }

    debug!(
        roots = roots.length(),
        wrapped = report.wrapped,
        refreshed = report.refreshed,
        width = %stroke.width,
        color = %stroke.color,
        "outline applied"
    );

    Ok(report)
}

/// Run the pipeline over each root and hand the roots back for chaining.
pub fn apply_outline<'a>(roots: &Selection<'a>, options: &Options) -> Result<Selection<'a>> {
    apply_outline_report(roots, options)?;
    Ok(roots.clone())
}

/// Parse, outline the configured roots, serialize.
pub(crate) fn outline_html(html: &str, options: &Options) -> Result<OutlineResult> {
    debug!(len = html.len(), "parsing document");
    let document = Document::from(html);
    outline_document(&document, options)
}

/// Outline the configured roots of a parsed document and serialize it.
pub(crate) fn outline_document(document: &Document, options: &Options) -> Result<OutlineResult> {
    let roots = dom::select_roots(document, options.selector.as_deref()).inspect_err(|e| {
        tracing::warn!(error = %e, "no roots to outline");
    })?;
    let report = apply_outline_report(&roots, options)?;

    Ok(OutlineResult {
        html: document.html().to_string(),
        report,
    })
}

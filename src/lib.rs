//! # rs-outliner
//!
//! Outlined (stroked) text for HTML, built by cloning only text nodes so the
//! existing markup is preserved.
//!
//! Every visible text node outside verbatim containers (`script`, `style`,
//! `textarea`, `noscript`, `code`, `pre`) becomes:
//!
//! ```html
//! <span class="outline-text">
//!   <span class="original">text</span>
//!   <span class="clone" aria-hidden="true">text</span>
//! </span>
//! ```
//!
//! The original layer paints the fill, the clone paints the stroke behind it
//! via `-webkit-text-stroke`. Running again on the same tree only refreshes
//! the stroke.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_outliner::{outline_with_options, Options};
//!
//! let html = "<html><body><h1>Hello <em>world</em></h1></body></html>";
//! let options = Options {
//!     width: "2px".to_string(),
//!     color: "red".to_string(),
//!     ..Options::default()
//! };
//!
//! let result = outline_with_options(html, &options)?;
//! assert_eq!(result.report.wrapped, 2);
//! assert!(result.html.contains("-webkit-text-stroke: 2px red;"));
//! # Ok::<(), rs_outliner::Error>(())
//! ```
//!
//! ## Working on a parsed document
//!
//! ```rust
//! use rs_outliner::{apply_outline, dom, Options};
//!
//! let doc = dom::parse(r#"<p class="title">Hi</p><pre>raw</pre>"#);
//! let roots = apply_outline(&doc.select(".title"), &Options::default())?;
//! assert_eq!(roots.length(), 1);
//! assert_eq!(doc.select(".outline-text").length(), 1);
//! # Ok::<(), rs_outliner::Error>(())
//! ```

mod error;
mod options;
mod outliner;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Outline container kinds and the traversal skip set.
pub mod kind;

/// Eligible text node discovery.
pub mod traversal;

/// Rewriting a text node into an outline unit.
pub mod transform;

/// Stroke refresh over existing outline units.
pub mod refresh;

/// Inline style declarations and the outline presentation.
pub mod style;

/// Charset sniffing and transcoding for byte input.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_COLOR, DEFAULT_WIDTH};
pub use outliner::{apply_outline, apply_outline_report};
pub use result::{OutlineReport, OutlineResult};
pub use style::Stroke;

/// Outlines an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_outliner::outline;
///
/// let result = outline("<html><body><p>Content</p></body></html>")?;
/// assert!(result.html.contains(r#"<span class="clone" aria-hidden="true""#));
/// # Ok::<(), rs_outliner::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn outline(html: &str) -> Result<OutlineResult> {
    outline_with_options(html, &Options::default())
}

/// Outlines an HTML document with custom options.
///
/// `options.selector` picks the roots; without it the document body is
/// processed. A selector that matches nothing is an
/// [`Error::InvalidSelector`].
#[allow(clippy::missing_errors_doc)]
pub fn outline_with_options(html: &str, options: &Options) -> Result<OutlineResult> {
    outliner::outline_html(html, options)
}

/// Outlines HTML bytes, detecting the charset from `<meta>` declarations.
///
/// Invalid characters are replaced with U+FFFD rather than causing errors.
#[allow(clippy::missing_errors_doc)]
pub fn outline_bytes(html: &[u8]) -> Result<OutlineResult> {
    outline_bytes_with_options(html, &Options::default())
}

/// Outlines HTML bytes with custom options and charset detection.
///
/// The output is UTF-8; `<meta>` charset declarations naming another
/// encoding are rewritten to `utf-8`.
#[allow(clippy::missing_errors_doc)]
pub fn outline_bytes_with_options(html: &[u8], options: &Options) -> Result<OutlineResult> {
    let html_str = encoding::decode_html(html);
    let document = dom::parse(&html_str);
    encoding::declare_utf8(&document);
    outliner::outline_document(&document, options)
}

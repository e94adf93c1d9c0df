//! Inline Style Presentation
//!
//! Edits an element's `style` attribute as an ordered list of declarations,
//! with the same override semantics as setting individual CSS properties:
//! an existing property is replaced in place, a new one is appended, and
//! every other author declaration is left alone.
//!
//! The outline scaffold needs three declaration sets:
//!
//! | Container      | Declarations                                         |
//! |----------------|------------------------------------------------------|
//! | `outline-text` | stacking context (`position: relative`, `z-index: 0`) |
//! | `original`     | fill layer in front (`z-index: 1`)                    |
//! | `clone`        | stroke layer behind (`-webkit-text-stroke`, ...)      |

use std::fmt;

use cssparser::{Delimiter, ParseError, Parser, ParserInput};
use dom_query::NodeRef;

use crate::options::{DEFAULT_COLOR, DEFAULT_WIDTH};

/// Stroke parameters applied to clone containers.
///
/// Both values are passed through verbatim; malformed dimensions or colors
/// are the browser's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    /// Stroke width, e.g. `"4px"` or `"0.1em"`.
    pub width: String,
    /// Stroke color, e.g. `"#000000"` or `"red"`.
    pub color: String,
}

impl Stroke {
    /// Value of the `text-stroke` shorthand: `"{width} {color}"`.
    #[must_use]
    pub fn shorthand(&self) -> String {
        format!("{} {}", self.width, self.color)
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH.to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// Ordered CSS declarations parsed from a `style` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    entries: Vec<(String, String)>,
}

impl StyleDeclarations {
    /// Parse a `style` attribute value.
    ///
    /// Values are kept as written, so `;` inside strings, `url(...)` or
    /// comments stays part of its declaration. Declarations that do not
    /// start with `name:` or have an empty value are dropped.
    #[must_use]
    pub fn parse(style: &str) -> Self {
        let mut input = ParserInput::new(style);
        let mut parser = Parser::new(&mut input);
        let mut entries = Vec::new();

        while !parser.is_exhausted() {
            if let Ok(Some(entry)) = parser.parse_until_after(Delimiter::Semicolon, parse_declaration) {
                entries.push(entry);
            }
        }
        Self { entries }
    }

    /// Read the declarations currently on a node.
    #[must_use]
    pub fn of(node: &NodeRef) -> Self {
        node.attr("style")
            .map(|s| Self::parse(&s))
            .unwrap_or_default()
    }

    /// Set a property, replacing an existing declaration in place.
    ///
    /// Later duplicates of the same property are removed so the new value
    /// is the one that applies.
    pub fn set(&mut self, prop: &str, value: &str) {
        let prop = prop.to_ascii_lowercase();
        match self.entries.iter().position(|(p, _)| *p == prop) {
            Some(index) => {
                self.entries[index].1 = value.to_string();
                let mut seen = 0;
                self.entries.retain(|(p, _)| {
                    if *p != prop {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.entries.push((prop, value.to_string())),
        }
    }

    /// Look up a property value.
    #[must_use]
    pub fn get(&self, prop: &str) -> Option<&str> {
        let prop = prop.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_str())
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the declarations back to a node's `style` attribute.
    pub fn write_to(&self, node: &NodeRef) {
        node.set_attr("style", &self.to_string());
    }
}

/// One `name: value` declaration, up to the next top-level `;`.
fn parse_declaration<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Option<(String, String)>, ParseError<'i, ()>> {
    let name = parser.expect_ident()?.to_ascii_lowercase();
    parser.expect_colon()?;

    // Blocks and functions are consumed whole by `next`.
    let start = parser.position();
    while parser.next().is_ok() {}
    let value = parser.slice_from(start).trim().trim_end_matches(';').trim_end();

    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some((name, value.to_string())))
}

impl fmt::Display for StyleDeclarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (prop, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{prop}: {value};")?;
        }
        Ok(())
    }
}

/// Set several properties on a node in one read-modify-write.
pub fn set_properties(node: &NodeRef, props: &[(&str, &str)]) {
    let mut decls = StyleDeclarations::of(node);
    for (prop, value) in props {
        decls.set(prop, value);
    }
    decls.write_to(node);
}

/// Base stacking for the wrapper: it forms the stacking context so the
/// clone paints above any parent background.
pub fn style_wrapper(wrapper: &NodeRef) {
    set_properties(
        wrapper,
        &[
            ("position", "relative"),
            ("display", "inline-block"),
            ("line-height", "inherit"),
            ("vertical-align", "baseline"),
            ("z-index", "0"),
        ],
    );
}

/// Fill layer, always in front of the stroke.
pub fn style_original(original: &NodeRef) {
    set_properties(
        original,
        &[
            ("position", "relative"),
            ("z-index", "1"),
            ("white-space", "pre-wrap"),
        ],
    );
}

/// Stroke layer. Uses `z-index: 0`, never negative, so it stays inside the
/// wrapper's stacking context.
pub fn apply_stroke(clone: &NodeRef, stroke: &Stroke) {
    let shorthand = stroke.shorthand();
    set_properties(
        clone,
        &[
            ("position", "absolute"),
            ("top", "0"),
            ("left", "0"),
            ("transform", "none"),
            ("z-index", "0"),
            ("pointer-events", "none"),
            ("color", "transparent"),
            ("-webkit-text-stroke", shorthand.as_str()),
            ("text-stroke", shorthand.as_str()),
            ("white-space", "pre-wrap"),
        ],
    );
}

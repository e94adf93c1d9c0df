//! Configuration options for outlining.
//!
//! The `Options` struct carries the stroke parameters and the optional root
//! selector. It is built per call; there is no shared default state.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::style::Stroke;

/// Default stroke width.
pub const DEFAULT_WIDTH: &str = "4px";

/// Default stroke color (opaque black).
pub const DEFAULT_COLOR: &str = "#000000";

/// Configuration options for outlining.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_outliner::Options;
///
/// let options = Options {
///     width: "2px".to_string(),
///     color: "red".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.stroke().shorthand(), "2px red");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Stroke width as a CSS dimension. Not validated.
    ///
    /// Default: `"4px"`
    #[serde(deserialize_with = "lenient_string")]
    pub width: String,

    /// Stroke color as a CSS color. Not validated.
    ///
    /// Default: `"#000000"`
    #[serde(deserialize_with = "lenient_string")]
    pub color: String,

    /// CSS selector choosing the roots to outline in a parsed document.
    ///
    /// Only used by the string/bytes entry points; `None` outlines the
    /// document body.
    ///
    /// Default: `None`
    pub selector: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH.to_string(),
            color: DEFAULT_COLOR.to_string(),
            selector: None,
        }
    }
}

impl Options {
    /// Merge caller overrides from a JSON object over the defaults.
    ///
    /// Missing keys keep their defaults and unknown keys are ignored.
    /// `null` is treated as an empty object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => {
                serde_json::from_value(value).map_err(|e| Error::InvalidOptions(e.to_string()))
            }
            other => Err(Error::InvalidOptions(format!(
                "expected a JSON object, found {other}"
            ))),
        }
    }

    /// Parse a JSON options document, see [`Options::from_value`].
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| Error::InvalidOptions(e.to_string()))?;
        Self::from_value(value)
    }

    /// Resolve the effective stroke. Empty values fall back to the defaults.
    #[must_use]
    pub fn stroke(&self) -> Stroke {
        Stroke {
            width: non_empty_or(&self.width, DEFAULT_WIDTH),
            color: non_empty_or(&self.color, DEFAULT_COLOR),
        }
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Coerce any JSON scalar to a string. Falsy values (`null`, `false`, `0`,
/// `""`) become empty so that [`Options::stroke`] falls back to the default.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => String::new(),
        Value::String(s) => s,
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    })
}

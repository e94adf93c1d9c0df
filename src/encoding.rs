//! Charset sniffing for HTML input given as bytes.
//!
//! Looks for a charset declaration in the document head and decodes to
//! UTF-8. The outline pipeline itself only ever sees `&str`, and the output
//! is always UTF-8, so declarations of other charsets are rewritten.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::Regex;
use tracing::debug;

use crate::dom::Document;

/// Bytes inspected for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// `<meta charset="...">` or `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+?charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("valid regex")
});

/// `charset=...` inside a `content` attribute value.
#[allow(clippy::expect_used)]
static CONTENT_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)["']?"#).expect("valid regex")
});

/// Declared label from the first `SNIFF_LIMIT` bytes, if any.
fn declared_label(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Encoding declared by the document, UTF-8 when absent or unknown.
///
/// A UTF-16 label in a `<meta>` is read as UTF-8: a document whose markup
/// could be matched as ASCII is not UTF-16.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> &'static Encoding {
    match declared_label(html).and_then(|label| Encoding::for_label(label.as_bytes())) {
        Some(enc) if enc == UTF_16LE || enc == UTF_16BE => UTF_8,
        Some(enc) => enc,
        None => UTF_8,
    }
}

/// True when `label` names a known encoding other than UTF-8.
fn is_foreign_label(label: &str) -> bool {
    Encoding::for_label(label.trim().as_bytes()).is_some_and(|enc| enc != UTF_8)
}

/// Point charset declarations of other encodings at UTF-8.
///
/// Covers `<meta charset>` and the `charset=` part of
/// `<meta http-equiv="Content-Type" content>`. Unknown labels are left
/// alone. Returns how many elements were rewritten.
pub fn declare_utf8(document: &Document) -> usize {
    let mut rewritten = 0;

    for meta in document.select("meta[charset]").nodes() {
        if meta.attr("charset").is_some_and(|label| is_foreign_label(&label)) {
            meta.set_attr("charset", "utf-8");
            rewritten += 1;
        }
    }

    for meta in document.select("meta[http-equiv][content]").nodes() {
        let is_content_type = meta
            .attr("http-equiv")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("content-type"));
        let Some(content) = meta.attr("content") else {
            continue;
        };
        let foreign = CONTENT_CHARSET_RE
            .captures(&content)
            .and_then(|c| c.get(1))
            .is_some_and(|m| is_foreign_label(m.as_str()));
        if is_content_type && foreign {
            let updated = CONTENT_CHARSET_RE.replace(&content, "charset=utf-8");
            meta.set_attr("content", &updated);
            rewritten += 1;
        }
    }

    if rewritten > 0 {
        debug!(rewritten, "charset declarations now say utf-8");
    }
    rewritten
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD; this never fails.
///
/// ```
/// use rs_outliner::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = sniff_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

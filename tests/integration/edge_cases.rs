//! Edge case integration tests
//!
//! Tests for unusual inputs, boundary conditions, and error handling.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_outliner::dom;
use rs_outliner::kind::NodeKind;
use rs_outliner::{apply_outline_report, outline, outline_with_options, Error, Options};

#[test]
fn test_outline_empty_input() {
    let result = outline("").expect("empty input is a valid document");
    assert_eq!(result.report.wrapped, 0);
    assert!(!result.html.contains("outline-text"));
}

#[test]
fn test_outline_whitespace_only_body() {
    let result = outline("<html><body>\n   \n\t</body></html>").expect("ok");
    assert_eq!(result.report.wrapped, 0);
}

#[test]
fn test_outline_malformed_html() {
    let html = "<html><body><p>Unclosed paragraph<div>Nested<p>Badly</body>";
    let result = outline(html).expect("parser recovers");
    assert_eq!(result.report.wrapped, 3);
}

#[test]
fn test_outline_deeply_nested_html() {
    let mut html = String::from("<html><body>");
    for i in 0..50 {
        html.push_str(&format!("<div class='level-{i}'>"));
    }
    html.push_str("<p>Deep content here</p>");
    for _ in 0..50 {
        html.push_str("</div>");
    }
    html.push_str("</body></html>");

    let result = outline(&html).expect("ok");
    assert_eq!(result.report.wrapped, 1);
    assert!(result.html.contains(r#"<p><span class="outline-text""#));
}

#[test]
fn test_outline_reparsed_output_is_stable() {
    let first = outline("<html><body><h1>Hi <b>there</b></h1></body></html>").expect("ok");
    let second = outline(&first.html).expect("ok");

    assert_eq!(second.report.wrapped, 0);
    assert_eq!(second.report.refreshed, 2);
    assert_eq!(second.html, first.html);
}

#[test]
fn test_outline_invalid_selector() {
    let options = Options {
        selector: Some("[[[".to_string()),
        ..Options::default()
    };
    assert!(matches!(
        outline_with_options("<p>x</p>", &options),
        Err(Error::InvalidSelector(_))
    ));
}

#[test]
fn test_comments_are_ignored() {
    let doc = dom::parse(r#"<div id="r"><!-- a comment -->text</div>"#);
    let report = apply_outline_report(&doc.select("#r"), &Options::default()).expect("ok");
    assert_eq!(report.wrapped, 1);
    assert!(doc.html().contains("<!-- a comment -->"));
}

#[test]
fn test_text_nested_below_an_original_is_eligible() {
    // Only the direct parent is checked. An element inside an original
    // container can only be reached when the walk starts below it.
    let doc = dom::parse(
        r#"<span class="outline-text"><span class="original"><b id="inner">deep</b></span><span class="clone">deep</span></span>"#,
    );

    let from_top = apply_outline_report(&dom::document_root(&doc), &Options::default()).expect("ok");
    assert_eq!(from_top.wrapped, 0);

    let from_inner = apply_outline_report(&doc.select("#inner"), &Options::default()).expect("ok");
    assert_eq!(from_inner.wrapped, 1);
    let inner = dom::first_node(&doc.select("#inner")).expect("inner");
    let children = dom::child_nodes(&inner);
    assert_eq!(NodeKind::of(&children[0]), Some(NodeKind::OutlineText));
}

#[test]
fn test_textarea_and_title_handling() {
    let html = "<html><head><title>Page title</title></head><body><textarea>typed</textarea></body></html>";
    let result = outline(html).expect("ok");

    // The default root is the body, so the title stays plain text.
    assert_eq!(result.report.wrapped, 0);
    assert!(result.html.contains("<title>Page title</title>"));
    assert!(result.html.contains("<textarea>typed</textarea>"));
}

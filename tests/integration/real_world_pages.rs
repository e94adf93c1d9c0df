//! Realistic page layouts: hero banners, navigation, articles with code.

#![allow(clippy::expect_used)]

use rs_outliner::dom;
use rs_outliner::{apply_outline_report, outline_with_options, Options};

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Launch</title>
    <style>.hero { background: url(hero.jpg); }</style>
</head>
<body>
    <header class="hero">
        <h1 class="headline">Ship <em>faster</em> today</h1>
        <p class="tagline">No credit card required.</p>
    </header>
    <nav><a href="/">Home</a> | <a href="/docs">Docs</a></nav>
    <article>
        <p>Install with <code>cargo install launch</code> and run:</p>
        <pre><code>launch --fast
launch --faster</code></pre>
        <textarea>feedback here</textarea>
    </article>
    <script>console.log("hero");</script>
</body>
</html>
"#;

#[test]
fn test_headline_only() {
    let options = Options {
        width: "3px".to_string(),
        color: "#fff".to_string(),
        selector: Some(".headline, .tagline".to_string()),
    };

    let result = outline_with_options(LANDING_PAGE, &options).expect("ok");

    // "Ship ", "faster", " today", "No credit card required."
    assert_eq!(result.report.wrapped, 4);
    assert_eq!(result.report.refreshed, 4);
    assert!(result.html.contains("<nav><a href=\"/\">Home</a>"));
    assert!(result.html.contains("-webkit-text-stroke: 3px #fff;"));
}

#[test]
fn test_whole_body_skips_code_and_scripts() {
    let doc = dom::parse(LANDING_PAGE);
    let report = apply_outline_report(&doc.select("body"), &Options::default()).expect("ok");

    // header: 4, nav: "Home", " | ", "Docs", article: "Install with ", " and run:"
    assert_eq!(report.wrapped, 9);

    assert_eq!(doc.select("code .outline-text").length(), 0);
    assert_eq!(doc.select("pre .outline-text").length(), 0);
    assert_eq!(doc.select("textarea").text().to_string(), "feedback here");
    assert!(doc.select("script").text().contains("console.log"));
    assert_eq!(doc.select("style .outline-text").length(), 0);
}

#[test]
fn test_whole_body_is_idempotent() {
    let doc = dom::parse(LANDING_PAGE);
    let body = doc.select("body");

    apply_outline_report(&body, &Options::default()).expect("first run");
    let after_first = doc.html().to_string();

    let second = apply_outline_report(&body, &Options::default()).expect("second run");
    assert_eq!(second.wrapped, 0);
    assert_eq!(second.refreshed, 9);
    assert_eq!(doc.html().to_string(), after_first);
}

//! Performance benchmarks for rs-outliner.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_outliner::{apply_outline, dom, outline, outline_with_options, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Page</title>
</head>
<body>
    <header>
        <h1>Sample <em>Outlined</em> Title</h1>
        <p class="tagline">A short tagline under the title.</p>
    </header>
    <article>
        <p>This is the first paragraph. It contains <a href="/x">a link</a>
        and <strong>bold text</strong> that each become their own unit.</p>
        <p>Inline <code>code()</code> is skipped, as is the block below.</p>
        <pre><code>fn main() {
    println!("skipped");
}</code></pre>
    </article>
</body>
</html>
"#;

/// Page with `n` paragraphs of mixed inline content.
fn synthetic_page(n: usize) -> String {
    let mut html = String::from("<html><body>");
    for i in 0..n {
        html.push_str(&format!(
            "<p>Paragraph {i} with <b>bold</b>, <i>italic</i> and <code>skip</code> text.</p>"
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_outline_default(c: &mut Criterion) {
    c.bench_function("outline_default", |b| {
        b.iter(|| outline(black_box(SAMPLE_HTML)));
    });
}

fn bench_outline_with_selector(c: &mut Criterion) {
    let options = Options {
        selector: Some("header".to_string()),
        ..Options::default()
    };

    c.bench_function("outline_with_selector", |b| {
        b.iter(|| outline_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

/// Second run on an outlined document: traversal plus refresh only.
fn bench_refresh_only(c: &mut Criterion) {
    let doc = dom::parse(SAMPLE_HTML);
    let body = doc.select("body");
    if let Err(e) = apply_outline(&body, &Options::default()) {
        panic!("refresh_only setup failed: {e}");
    }

    c.bench_function("refresh_only", |b| {
        b.iter(|| apply_outline(black_box(&body), black_box(&Options::default())).map(|s| s.length()));
    });
}

fn bench_synthetic_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthetic");

    for n in [10, 100, 1000] {
        let html = synthetic_page(n);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("outline", n), &html, |b, html| {
            b.iter(|| outline(black_box(html)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_outline_default,
    bench_outline_with_selector,
    bench_refresh_only,
    bench_synthetic_sizes
);
criterion_main!(benches);

//! Performance benchmarks for html-selection.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Class-list mutation over many nodes
//! - Text extraction with and without separators
//! - Form and media heuristics on a realistic page

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use html_selection::Document;

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head><title>Sample Page</title></head>
<body>
    <nav class="menu main">
        <a href="/" class="link home">Home</a>
        <a href="/about" class="link">About</a>
    </nav>
    <article class="post">
        <h1>Sample Article Title</h1>
        <p class="lead">This is the first paragraph with <b>bold</b> text.</p>
        <p>Here is a second paragraph with more content.</p>
        <object data="/media/Player.swf">
            <param name="movie" value="/media/Player.swf">
            <embed src="/media/Fallback.swf" type="application/x-shockwave-flash">
        </object>
    </article>
    <form>
        <input type="text" name="q" value="search">
        <input type="radio" name="r" value="a" checked>
        <select name="s"><option value="1">One</option><option value="2" selected>Two</option></select>
    </form>
</body>
</html>
"#;

fn bench_class_list(c: &mut Criterion) {
    let doc = Document::new(SAMPLE_HTML);
    let nodes = doc.select("a, p, nav, article");

    c.bench_function("toggle_class", |b| {
        b.iter(|| {
            nodes.toggle_class(black_box(&["active highlighted"][..]));
        });
    });

    c.bench_function("has_class", |b| {
        b.iter(|| nodes.has_class(black_box("missing")));
    });
}

fn bench_text(c: &mut Criterion) {
    let doc = Document::new(SAMPLE_HTML);
    let body = doc.select("body");

    let mut group = c.benchmark_group("text");
    for separator in ["", " "] {
        group.throughput(Throughput::Bytes(SAMPLE_HTML.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("separator", format!("{separator:?}")),
            &separator,
            |b, sep| {
                b.iter(|| body.text_with_separator(black_box(sep)));
            },
        );
    }
    group.finish();
}

fn bench_heuristics(c: &mut Criterion) {
    let doc = Document::new(SAMPLE_HTML);
    let form = doc.select("form");
    let object = doc.select("object");

    c.bench_function("form_val", |b| {
        b.iter(|| black_box(&form).val());
    });

    c.bench_function("object_src", |b| {
        b.iter(|| black_box(&object).object_src());
    });
}

criterion_group!(benches, bench_class_list, bench_text, bench_heuristics);
criterion_main!(benches);

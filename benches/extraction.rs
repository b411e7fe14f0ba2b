//! Benchmarks for results page extraction.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use serplinks::dom::{descendants, parse_html};
use serplinks::sanitize::{sanitize_title, sanitize_url};
use serplinks::{ExtractConfig, build_document, build_document_with};

const TDD_HTML: &str = include_str!("../tests/fixtures/tdd.html");

/// A larger page: the fixture body repeated to roughly a hundred results.
fn large_page() -> String {
    TDD_HTML.repeat(10)
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_html", |b| {
        b.iter(|| parse_html(TDD_HTML));
    });
}

fn bench_walk(c: &mut Criterion) {
    let parsed = parse_html(TDD_HTML);
    let dom = &parsed.dom;
    c.bench_function("descendants", |b| {
        b.iter(|| descendants(dom, dom.document()).count());
    });
}

fn bench_build_document(c: &mut Criterion) {
    c.bench_function("build_document", |b| {
        b.iter(|| build_document(TDD_HTML).unwrap());
    });

    let large = large_page();
    let config = ExtractConfig::default();
    c.bench_function("build_document_large", |b| {
        b.iter(|| build_document_with(&large, &config).unwrap());
    });
}

fn bench_sanitize(c: &mut Criterion) {
    let href = "/url?q=https://en.wikipedia.org/wiki/Test-driven_development&sa=U&ved=2ahUKEwjOvI2Xid2DAxV8M1kFHczQAXwQFnoECAoQAg&usg=AOvVaw2r6YYBeWCTs0Zv2VznWfbr";
    let title = "\n\t\t\tTest-driven development - Wikipedia\n\t\t";
    c.bench_function("sanitize", |b| {
        b.iter(|| (sanitize_url(href), sanitize_title(title)));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_walk,
    bench_build_document,
    bench_sanitize
);
criterion_main!(benches);

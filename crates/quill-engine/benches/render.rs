use criterion::{Criterion, criterion_group, criterion_main};
use quill_engine::{
    HtmlFlavor, KeywordHighlighter, PlainHighlighter, RenderOptions, parse_document,
    render_markdown, render_plain, to_html,
};
mod common;

fn bench_render_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    let content = common::generate_code_heavy(200);
    let options = RenderOptions::default();
    let highlighter = KeywordHighlighter::new();

    group.bench_function("plain_phase", |b| {
        b.iter(|| {
            let tree = render_plain(
                parse_document(std::hint::black_box(&content)),
                &highlighter,
                &options,
            );
            std::hint::black_box(tree);
        });
    });

    group.bench_function("keyword_highlighting", |b| {
        b.iter(|| {
            let tree = render_markdown(std::hint::black_box(&content), &highlighter, &options);
            std::hint::black_box(tree);
        });
    });

    group.bench_function("plain_highlighter", |b| {
        b.iter(|| {
            let tree = render_markdown(std::hint::black_box(&content), &PlainHighlighter, &options);
            std::hint::black_box(tree);
        });
    });

    group.finish();
}

fn bench_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("html");
    group.sample_size(20);

    let content = common::generate_large_document();
    let tree = render_markdown(&content, &KeywordHighlighter, &RenderOptions::default());

    group.bench_function("preview", |b| {
        b.iter(|| std::hint::black_box(to_html(&tree, HtmlFlavor::Preview)));
    });
    group.bench_function("email", |b| {
        b.iter(|| std::hint::black_box(to_html(&tree, HtmlFlavor::Email)));
    });

    group.finish();
}

criterion_group!(benches, bench_render_phases, bench_html);
criterion_main!(benches);

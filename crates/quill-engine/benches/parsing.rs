use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quill_engine::parse_document;
mod common;

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");
    group.sample_size(20);

    for size in [10, 100, 1000] {
        let content = common::generate_markdown_content(size);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| {
                let doc = parse_document(std::hint::black_box(content));
                std::hint::black_box(doc);
            });
        });
    }

    group.finish();
}

fn bench_inline_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");
    group.sample_size(20);

    let line = "plain **bold** *italic* `code` and an unclosed ** marker ".repeat(50);
    group.bench_function("long_paragraph", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&line));
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_document, bench_inline_heavy);
criterion_main!(benches);

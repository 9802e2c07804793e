//! Benchmarks for wordrank

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wordrank::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence (AI) that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. The learning can be supervised, semi-supervised or
unsupervised. Deep learning has been applied to various fields including computer
vision, speech recognition, natural language processing, and drug design.

Pembelajaran mesin adalah cabang dari kecerdasan buatan yang mempelajari bagaimana
komputer dapat belajar dari data. Jaringan saraf tiruan digunakan untuk pengenalan
pola pada data yang besar dan kompleks.
"#;

fn benchmark_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::new();

    c.bench_function("normalize_sample", |b| {
        b.iter(|| normalizer.normalize(black_box(SAMPLE_TEXT)))
    });

    let mut group = c.benchmark_group("normalize_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| normalizer.normalize(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_graph_building(c: &mut Criterion) {
    let tokens = Normalizer::new().normalize(&SAMPLE_TEXT.repeat(10));

    c.bench_function("graph_build", |b| {
        b.iter(|| GraphBuilder::from_tokens(black_box(&tokens)))
    });
}

fn benchmark_pagerank(c: &mut Criterion) {
    let tokens = Normalizer::new().normalize(&SAMPLE_TEXT.repeat(20));
    let csr = CsrGraph::from_graph(&GraphBuilder::from_tokens(&tokens));

    let mut group = c.benchmark_group("pagerank");
    group.bench_function("sequential", |b| {
        b.iter(|| StandardPageRank::new().run(black_box(&csr)))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| StandardPageRank::new().with_parallel(true).run(black_box(&csr)))
    });
    group.finish();
}

fn benchmark_end_to_end(c: &mut Criterion) {
    let ranker = KeywordRanker::default();

    c.bench_function("extract_keywords", |b| {
        b.iter(|| ranker.run(black_box(SAMPLE_TEXT)))
    });
}

criterion_group!(
    benches,
    benchmark_normalize,
    benchmark_graph_building,
    benchmark_pagerank,
    benchmark_end_to_end
);
criterion_main!(benches);

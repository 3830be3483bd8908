use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use loxbench::core::{corpus, tally};

/// Scan the canonical 10k-line corpus end to end.
fn bench_scan(c: &mut Criterion) {
    let source = corpus::synthesize(corpus::DEFAULT_LINES);

    let mut g = c.benchmark_group("scan");
    g.throughput(Throughput::Bytes(source.len() as u64));
    g.bench_function("tally_canonical_corpus", |b| {
        b.iter(|| tally::tally(&source));
    });
    g.finish();
}

/// Build the corpus text in memory, one element per emitted line.
fn bench_synthesize(c: &mut Criterion) {
    let mut g = c.benchmark_group("synthesize");
    g.throughput(Throughput::Elements(corpus::DEFAULT_LINES as u64 + 1));
    g.bench_function("canonical_corpus", |b| {
        b.iter(|| corpus::synthesize(corpus::DEFAULT_LINES));
    });
    g.finish();
}

criterion_group!(benches, bench_scan, bench_synthesize);
criterion_main!(benches);

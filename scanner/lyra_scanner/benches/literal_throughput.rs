//! Literal-scanning throughput for the external scanner.
//!
//! Measures the full session loop — speculative scans, rollback on
//! decline, state-derived valid sets — over generated sources dominated by
//! heredocs and raw strings. No parsing, no diagnostics rendering.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lyra_scanner::{scan_literals, SourceBuffer};

/// N heredocs with multi-line SQL-ish bodies, tags in between.
fn generate_heredocs(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "@query{i} <<SQL,sql\nSELECT col_{i}\nFROM table_{i}\nWHERE id = {i}\nSQL\n"
            )
        })
        .collect()
}

/// N raw strings with embedded quote-hash runs that must not close early.
fn generate_raw_strings(n: usize) -> String {
    (0..n)
        .map(|i| format!("@pattern{i} r##\"quote \" and \"# inside {i}\"## @\n"))
        .collect()
}

fn bench_literal_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/literals/throughput");

    for count in [10, 100, 1000] {
        for (shape, source) in [
            ("heredocs", generate_heredocs(count)),
            ("raw_strings", generate_raw_strings(count)),
        ] {
            group.throughput(Throughput::Bytes(source.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(shape, count),
                &source,
                |b, src| {
                    b.iter(|| {
                        let buffer = SourceBuffer::new(src);
                        let (tokens, open) = scan_literals(&buffer);
                        black_box((tokens.len(), open));
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_literal_throughput);
criterion_main!(benches);

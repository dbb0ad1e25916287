// benches/stream_benchmarks.rs
// Micro-benchmarks for the chunked read path and the sum helper.
// Sweeps chunk sizes to show the per-call overhead amortizing away as the
// chunk grows, mirroring how a consumer would tune its refill buffer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqstream::{sum, SequenceStream, StreamRegistry};

const STREAM_LEN: usize = 100_000;

fn bench_chunked_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunked_drain");
    group.throughput(Throughput::Elements(STREAM_LEN as u64));

    for chunk_size in [1usize, 16, 256, 1024, 16 * 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                let mut chunk = vec![0i32; chunk_size];
                b.iter(|| {
                    let mut stream = SequenceStream::new(STREAM_LEN);
                    let mut total_read = 0usize;
                    loop {
                        let n = stream.read(black_box(&mut chunk));
                        if n == 0 {
                            break;
                        }
                        total_read += n;
                    }
                    black_box(total_read)
                });
            },
        );
    }
    group.finish();
}

fn bench_iterator_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator_drain");
    group.throughput(Throughput::Elements(STREAM_LEN as u64));

    for chunk_size in [16usize, 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let total: i64 = SequenceStream::new(STREAM_LEN)
                        .chunks(chunk_size)
                        .map(|v| v as i64)
                        .sum();
                    black_box(total)
                });
            },
        );
    }
    group.finish();
}

fn bench_registry_overhead(c: &mut Criterion) {
    // Same drain loop as chunked_drain, but through validated handles, to
    // expose the per-call cost of the registry lookup.
    let mut group = c.benchmark_group("registry_drain");
    group.throughput(Throughput::Elements(STREAM_LEN as u64));

    for chunk_size in [16usize, 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                let mut chunk = vec![0i32; chunk_size];
                b.iter(|| {
                    let mut registry = StreamRegistry::new();
                    let id = registry.create(STREAM_LEN);
                    let mut total_read = 0usize;
                    loop {
                        let n = registry.read(id, black_box(&mut chunk), chunk_size).unwrap();
                        if n == 0 {
                            break;
                        }
                        total_read += n;
                    }
                    registry.destroy(id).unwrap();
                    black_box(total_read)
                });
            },
        );
    }
    group.finish();
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");
    // 65536 is the largest power of two whose triangular sum still fits i32.
    for len in [64usize, 4096, 65_536] {
        let values: Vec<i32> = (0..len as i32).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| black_box(sum(black_box(values))));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_chunked_drain,
    bench_iterator_drain,
    bench_registry_overhead,
    bench_sum
);
criterion_main!(benches);

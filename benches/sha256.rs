use streamsha::{calculate, Sha256};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

pub fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");
    for size in [64usize, 1024, 64 * 1024] {
        let message = vec![0x5Au8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, m| {
            b.iter(|| calculate(m))
        });
    }
    group.finish();
}

pub fn bench_chunked_update(c: &mut Criterion) {
    let message = vec![0x5Au8; 64 * 1024];
    let mut group = c.benchmark_group("chunked_update");
    group.throughput(Throughput::Bytes(message.len() as u64));
    for chunk_size in [1usize, 13, 64, 1000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let mut hasher = Sha256::new();
                    for chunk in message.chunks(chunk_size) {
                        hasher.update(chunk);
                    }
                    hasher.finalize()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_calculate, bench_chunked_update);
criterion_main!(benches);

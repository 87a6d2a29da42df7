//! Async performance benchmarks for LZSS
//!
//! Compares compressing many independent buffers sequentially against the
//! concurrent batch compressor.

#![cfg(feature = "async")]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzss::{compress, compress_bytes_async, expand_bytes_async, BatchCompressor};
use std::hint::black_box;
use std::time::Duration;
use tokio::runtime::Runtime;

fn generate_test_data(size: usize, seed: usize) -> Vec<u8> {
    let pattern = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        data.extend_from_slice(pattern);
        data.push((seed % 256) as u8);
    }
    data.truncate(size);
    data
}

fn async_batch_processing_benchmark(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime");
    let mut group = c.benchmark_group("async_batch_processing");
    group.measurement_time(Duration::from_secs(15));

    let test_cases = vec![
        (50, 10240), // 50 buffers of 10KB
        (20, 51200), // 20 buffers of 50KB
    ];

    for (buffer_count, buffer_size) in test_cases {
        let buffers: Vec<Vec<u8>> = (0..buffer_count)
            .map(|i| generate_test_data(buffer_size, i))
            .collect();
        let total_size = buffer_count * buffer_size;
        let label = format!("{}x{}KB", buffer_count, buffer_size / 1024);

        group.throughput(Throughput::Bytes(total_size as u64));
        group.bench_with_input(
            BenchmarkId::new("sequential", &label),
            &buffers,
            |b, buffers| {
                b.iter(|| {
                    buffers
                        .iter()
                        .map(|data| compress(black_box(data)))
                        .collect::<Vec<_>>()
                });
            },
        );

        for concurrency in [2, 4, 8] {
            let compressor = BatchCompressor::new().with_concurrency(concurrency);
            group.bench_with_input(
                BenchmarkId::new(format!("concurrent_{concurrency}"), &label),
                &buffers,
                |b, buffers| {
                    b.iter(|| {
                        rt.block_on(compressor.compress_buffers(black_box(buffers.clone())))
                            .expect("Compression failed")
                    });
                },
            );
        }
    }

    group.finish();
}

fn async_round_trip_benchmark(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime");
    let mut group = c.benchmark_group("async_round_trip");
    group.measurement_time(Duration::from_secs(10));

    let data = generate_test_data(1048576, 0);
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_with_input(BenchmarkId::from_parameter("1MB"), &data, |b, data| {
        b.iter(|| {
            rt.block_on(async {
                let compressed = compress_bytes_async(black_box(data))
                    .await
                    .expect("Compression failed");
                expand_bytes_async(&compressed)
                    .await
                    .expect("Decompression failed")
            })
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    async_batch_processing_benchmark,
    async_round_trip_benchmark
);
criterion_main!(benches);

//! ChaCha20 block function benchmark
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use criterion_cycles_per_byte::CyclesPerByte;
use std::hint::black_box;

use chacha20_block::{BLOCK_SIZE, R8, R12, R20, Rounds, block_with_rounds, to_le_bytes};

const BLOCKS: u32 = 64;

fn keystream<R: Rounds>(buf: &mut [u8], key: [u32; 8], nonce: [u32; 3]) {
    for (chunk, counter) in buf.chunks_exact_mut(BLOCK_SIZE).zip(0..) {
        let words = block_with_rounds::<R>(black_box(key), black_box(nonce), counter);
        chunk.copy_from_slice(&to_le_bytes(words));
    }
}

fn bench(c: &mut Criterion<CyclesPerByte>) {
    let mut group = c.benchmark_group("block-function");

    let mut buf = vec![0u8; BLOCKS as usize * BLOCK_SIZE];
    group.throughput(Throughput::Bytes(buf.len() as u64));

    let key = [0x0302_0100; 8];
    let nonce = [0x0900_0000, 0x4a00_0000, 0];

    group.bench_function(BenchmarkId::new("chacha8", BLOCKS), |b| {
        b.iter(|| keystream::<R8>(&mut buf, key, nonce));
    });
    group.bench_function(BenchmarkId::new("chacha12", BLOCKS), |b| {
        b.iter(|| keystream::<R12>(&mut buf, key, nonce));
    });
    group.bench_function(BenchmarkId::new("chacha20", BLOCKS), |b| {
        b.iter(|| keystream::<R20>(&mut buf, key, nonce));
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().with_measurement(CyclesPerByte);
    targets = bench
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use digest::Digest as _;
use fleet_hash::hash::{Blake2b, Crc32, Sha256, Sha3_256, Sha512, XxHash64};

fn bench_block_multiple(c: &mut Criterion) {
    let inp = [7u8; 4096];

    let mut g = c.benchmark_group("hash-4k");
    g.throughput(Throughput::Bytes(inp.len() as u64));

    g.bench_function("fleet/sha256", |b| {
        b.iter(|| black_box(Sha256::hash(black_box(&inp))))
    });
    g.bench_function("rust-crypto/sha256", |b| {
        b.iter(|| black_box(sha2::Sha256::digest(black_box(&inp))))
    });

    g.bench_function("fleet/sha512", |b| {
        b.iter(|| black_box(Sha512::hash(black_box(&inp))))
    });
    g.bench_function("rust-crypto/sha512", |b| {
        b.iter(|| black_box(sha2::Sha512::digest(black_box(&inp))))
    });

    g.bench_function("fleet/sha3-256", |b| {
        b.iter(|| black_box(Sha3_256::hash(black_box(&inp))))
    });
    g.bench_function("rust-crypto/sha3-256", |b| {
        b.iter(|| black_box(sha3::Sha3_256::digest(black_box(&inp))))
    });

    g.bench_function("fleet/blake2b-512", |b| {
        b.iter(|| black_box(Blake2b::<64>::hash(black_box(&inp)).unwrap()))
    });

    g.bench_function("fleet/crc32", |b| {
        b.iter(|| black_box(Crc32::hash(black_box(&inp))))
    });
    g.bench_function("crc32fast", |b| {
        b.iter(|| black_box(crc32fast::hash(black_box(&inp))))
    });

    g.bench_function("fleet/xxhash64", |b| {
        b.iter(|| black_box(XxHash64::hash(black_box(&inp))))
    });
    g.bench_function("xxhash-rust/xxh64", |b| {
        b.iter(|| black_box(xxhash_rust::xxh64::xxh64(black_box(&inp), 0)))
    });

    g.finish();
}

fn bench_streaming_small_updates(c: &mut Criterion) {
    let inp = [7u8; 4096];

    let mut g = c.benchmark_group("hash-4k-64b-updates");
    g.throughput(Throughput::Bytes(inp.len() as u64));

    g.bench_function("fleet/sha256", |b| {
        b.iter(|| {
            let mut hasher = Sha256::new();
            for chunk in inp.chunks(64) {
                hasher.update(black_box(chunk)).unwrap();
            }
            black_box(hasher.digest().unwrap())
        })
    });

    g.bench_function("rust-crypto/sha256", |b| {
        b.iter(|| {
            let mut hasher = sha2::Sha256::new();
            for chunk in inp.chunks(64) {
                hasher.update(black_box(chunk));
            }
            black_box(hasher.finalize())
        })
    });

    g.finish();
}

criterion_group!(benches, bench_block_multiple, bench_streaming_small_updates);
criterion_main!(benches);

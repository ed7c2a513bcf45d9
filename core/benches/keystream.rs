//! Keystream throughput per cipher family.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use seedstream_core::config::GeneratorConfig;
use seedstream_core::keystream::{run, KeystreamGenerator};
use seedstream_core::seeds::InputSource;

const CIPHERS: &[&str] = &["aes-128-ctr", "aes-256-cbc", "chacha20", "rc4", "des-ede3-cbc", "aes-256-gcm"];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for exponent in [13i64, 20] {
        let bytes = 1u64 << (exponent - 3);
        group.throughput(Throughput::Bytes(bytes));
        for &cipher in CIPHERS {
            let generator = KeystreamGenerator::new(GeneratorConfig::new(cipher, exponent)).unwrap();
            group.bench_with_input(BenchmarkId::new(cipher, bytes), &generator, |b, g| {
                b.iter(|| g.generate(black_box(b"benchmark-seed\n")).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let mut seed_file = b"1000\n".to_vec();
    for i in 0..1000 {
        seed_file.extend_from_slice(format!("{i}\n").as_bytes());
    }
    let config = GeneratorConfig::new("aes-128-ctr", 12);

    c.bench_function("run/aes-128-ctr/1000x512B", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(600_000);
            run(InputSource::Memory(seed_file.clone()), &mut out, &config).unwrap();
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_generate, bench_run);
criterion_main!(benches);

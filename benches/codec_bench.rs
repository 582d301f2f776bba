// In qoi-core/benches/codec_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use qoi_core::{decode, encode, Channels, Colorspace};

// --- Mock Image Generation ---

const BENCH_WIDTH: u32 = 256;
const BENCH_HEIGHT: u32 = 256;

/// Generates a highly compressible image: long runs with an occasional step.
fn generate_low_entropy_image(channels: Channels) -> Vec<u8> {
    let len = BENCH_WIDTH as usize * BENCH_HEIGHT as usize * channels.count();
    let mut data = Vec::with_capacity(len);
    let mut value = 0u8;
    while data.len() < len {
        // One flat scanline, then a small brightness step.
        for _ in 0..BENCH_WIDTH {
            data.push(value);
            data.push(value);
            data.push(value);
            if channels == Channels::Rgba {
                data.push(255);
            }
        }
        value = value.wrapping_add(1);
    }
    data.truncate(len);
    data
}

/// Generates a noisy, less compressible image from a fixed LCG pattern.
fn generate_high_entropy_image(channels: Channels) -> Vec<u8> {
    let len = BENCH_WIDTH as usize * BENCH_HEIGHT as usize * channels.count();
    let mut data = Vec::with_capacity(len);
    let mut lcg: u32 = 0x12345678;
    while data.len() < len {
        lcg = lcg.wrapping_mul(1664525).wrapping_add(1013904223);
        data.push((lcg >> 24) as u8);
    }
    data
}

// --- Benchmark Suite ---

fn bench_codec(c: &mut Criterion) {
    // --- Setup Data ---
    let low_entropy = generate_low_entropy_image(Channels::Rgba);
    let high_entropy = generate_high_entropy_image(Channels::Rgba);

    // Prepare encoded streams once to benchmark decoding accurately.
    let encoded_low = encode(
        &low_entropy,
        BENCH_WIDTH,
        BENCH_HEIGHT,
        Channels::Rgba,
        Colorspace::Srgb,
    )
    .unwrap();
    let encoded_high = encode(
        &high_entropy,
        BENCH_WIDTH,
        BENCH_HEIGHT,
        Channels::Rgba,
        Colorspace::Srgb,
    )
    .unwrap();

    // --- Create a Benchmark Group ---
    let mut group = c.benchmark_group("QOI Codec");
    group.throughput(criterion::Throughput::Bytes(low_entropy.len() as u64));

    group.bench_function("Encode (Low Entropy)", |b| {
        b.iter(|| {
            black_box(encode(
                black_box(&low_entropy),
                BENCH_WIDTH,
                BENCH_HEIGHT,
                Channels::Rgba,
                Colorspace::Srgb,
            ))
        })
    });
    group.bench_function("Encode (High Entropy)", |b| {
        b.iter(|| {
            black_box(encode(
                black_box(&high_entropy),
                BENCH_WIDTH,
                BENCH_HEIGHT,
                Channels::Rgba,
                Colorspace::Srgb,
            ))
        })
    });

    group.bench_function("Decode (Low Entropy)", |b| {
        b.iter(|| black_box(decode(black_box(&encoded_low), None)))
    });
    group.bench_function("Decode (High Entropy)", |b| {
        b.iter(|| black_box(decode(black_box(&encoded_high), None)))
    });

    group.finish();
}

// These two lines generate the main function and register the benchmark group.
criterion_group!(benches, bench_codec);
criterion_main!(benches);

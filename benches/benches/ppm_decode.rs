//! Benchmark suite for PPM file decoding
//!
//! Measures full-document decoding and the frame codec in isolation.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use flipnote_benches::generate_test_ppm;
use flipnote_types::file::OpenConfig;
use flipnote_types::file::ppm::File;
use std::hint::black_box;

/// Benchmark full decodes at a few animation lengths
fn bench_decode_full(c: &mut Criterion) {
	let mut group = c.benchmark_group("ppm_decode_full");

	for frame_count in [1u16, 10, 50] {
		let data = generate_test_ppm(frame_count, 4096);
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("frames", frame_count), &data, |b, data| {
			b.iter(|| {
				let result = File::from_bytes(black_box(data));
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark the metadata-only fast path
fn bench_decode_metadata_only(c: &mut Criterion) {
	let data = generate_test_ppm(50, 4096);
	let config = OpenConfig::metadata_only();

	c.bench_function("ppm_decode_metadata_only", |b| {
		b.iter(|| {
			let result = File::from_bytes_with(black_box(&data), &config);
			black_box(result)
		});
	});
}

criterion_group!(benches, bench_decode_full, bench_decode_metadata_only);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use vector_blob_core::prelude::*;

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_blob");

    for dim in [128usize, 768, 1536] {
        let values: Vec<f32> = (0..dim).map(|i| i as f32 / dim as f32).collect();
        let vector = NumericVector::from_f32(&values).unwrap();
        let blob = encode(&vector, ElementKind::Float32).unwrap();

        group.throughput(Throughput::Bytes(blob.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode_f32", dim), &vector, |b, v| {
            b.iter(|| encode(black_box(v), ElementKind::Float32).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode_f32", dim), &blob, |b, blob| {
            b.iter(|| decode(black_box(blob)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode_view_f32", dim), &blob, |b, blob| {
            b.iter(|| decode_view(black_box(blob.as_bytes())).unwrap().element_count())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);

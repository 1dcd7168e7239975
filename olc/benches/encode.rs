use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Fixed-point coordinates spread over the globe.
fn sample_coords(count: usize) -> Vec<(i32, i32)> {
    (0..count)
        .map(|i| {
            let frac = i as f64 / count as f64;
            let lat = (-89.0 + frac * 178.0) * 1e7;
            let lon = (-179.0 + frac * 358.0 * 7.0 % 358.0) * 1e7;
            (lat as i32, lon as i32)
        })
        .collect()
}

fn bench_encode_into(c: &mut Criterion) {
    let mut buf = [0u8; 17];

    c.bench_function("encode_into_10", |b| {
        b.iter(|| {
            black_box(olc::encode_into(
                black_box(203_700_625),
                black_box(27_821_875),
                10,
                &mut buf,
            ));
        });
    });

    c.bench_function("encode_into_15", |b| {
        b.iter(|| {
            black_box(olc::encode_into(
                black_box(203_701_135),
                black_box(27_822_354),
                15,
                &mut buf,
            ));
        });
    });
}

fn bench_encode_string(c: &mut Criterion) {
    c.bench_function("encode_string_10", |b| {
        b.iter(|| black_box(olc::encode(black_box(-412_730_625), black_box(1_747_859_375), 10)));
    });
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_13", |b| {
        b.iter(|| black_box(olc::decode(black_box("7FG49QCJ+2VXGJ")).unwrap()));
    });
}

fn bench_batch(c: &mut Criterion) {
    let coords = sample_coords(1000);
    let mut buf = [0u8; 17];

    c.bench_function("batch_1000_encode_into", |b| {
        b.iter(|| {
            for &(lat, lon) in &coords {
                black_box(olc::encode_into(lat, lon, 11, &mut buf));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_encode_into,
    bench_encode_string,
    bench_decode,
    bench_batch,
);
criterion_main!(benches);

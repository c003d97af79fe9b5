use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use chromask::{label, rank, top_k, BinaryMask, ClassificationRule, Config, Pipeline, Raster};

/// Deterministic scene of red squares of varying size on a grey background.
fn synthetic_raster(rows: usize, cols: usize) -> Raster<u8> {
    let pixels: Vec<[u8; 3]> = (0..rows * cols)
        .map(|i| {
            let (row, col) = (i / cols, i % cols);
            let cell = (row / 32) * 31 + col / 32;
            let size = 4 + cell % 20;
            if row % 32 < size && col % 32 < size {
                [230, 15, 15]
            } else {
                [90, 90, 90]
            }
        })
        .collect();
    Raster::from_rgb_pixels(rows, cols, &pixels).expect("valid synthetic raster")
}

fn bench_classify(c: &mut Criterion) {
    let raster = synthetic_raster(1024, 1024);
    c.bench_function("classify_1k", |b| {
        b.iter(|| {
            chromask::classify(black_box(&raster), ClassificationRule::Red, 100.0, 50.0)
                .expect("classification succeeds")
        })
    });
}

fn bench_label(c: &mut Criterion) {
    let mask = BinaryMask::from_fn(1024, 1024, |row, col| (row / 3 + col / 5) % 4 != 0);
    c.bench_function("label_1k", |b| {
        b.iter(|| label(black_box(&mask)).expect("labeling succeeds"))
    });
}

fn bench_rank_and_extract(c: &mut Criterion) {
    let mask = BinaryMask::from_fn(1024, 1024, |row, col| row % 3 == 0 && col % 3 == 0);
    let (labels, stats) = label(&mask).expect("labeling succeeds");
    c.bench_function("rank_top2_1k", |b| {
        b.iter(|| {
            let ranking = rank(black_box(&stats));
            top_k(&labels, &ranking, 2).expect("extraction succeeds")
        })
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let raster = synthetic_raster(2048, 2048);
    let pipeline = Pipeline::new(Config::default()).expect("default config is valid");
    c.bench_function("pipeline_2k", |b| {
        b.iter(|| pipeline.run(black_box(&raster)).expect("pipeline succeeds"))
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_label,
    bench_rank_and_extract,
    bench_pipeline
);
criterion_main!(benches);

//! Performance measurement for the randomized split search at varying attempt counts

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use image::{Rgb, RgbImage};
use mondrify::algorithm::splitter::best_split;
use mondrify::spatial::Region;
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;

fn gradient_canvas(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}

/// Measures split-search cost as the attempt budget grows
fn bench_best_split(c: &mut Criterion) {
    let buffer = gradient_canvas(128, 128);
    let Some(region) = Region::covering(128, 128) else {
        return;
    };

    let mut group = c.benchmark_group("best_split");
    for attempts in &[10_usize, 50, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(attempts),
            attempts,
            |b, &attempts| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(42);
                    let split = best_split(&buffer, black_box(region), attempts, 2, 100, &mut rng);
                    let _ = black_box(split);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_best_split);
criterion_main!(benches);

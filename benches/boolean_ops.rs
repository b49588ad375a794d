use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sparse_region::{IntervalRow, RegionMap, ShapeContour};

/// A row of `n` disjoint two-pixel intervals spaced four apart.
fn comb_row(n: i32, phase: i32) -> IntervalRow {
    let mut row = IntervalRow::new();
    let mut cursor = 0;
    for k in 0..n {
        let lo = phase + k * 4;
        cursor = row.union_with_cursor(lo, lo + 1, cursor);
    }
    row
}

fn bench_row_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_union");
    for &n in &[16i32, 256, 4096] {
        let a = comb_row(n, 0);
        let b = comb_row(n, 2);
        group.bench_function(format!("interleaved_{n}"), |bench| {
            bench.iter(|| {
                let mut out = a.clone();
                out.union_row(black_box(&b));
                out
            })
        });
    }
    group.finish();
}

fn bench_row_subtract(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_subtract");
    for &n in &[16i32, 256, 4096] {
        let a = IntervalRow::from_interval(0, n * 4);
        let b = comb_row(n, 1);
        group.bench_function(format!("split_{n}"), |bench| {
            bench.iter(|| {
                let mut out = a.clone();
                out.subtract_row(black_box(&b));
                out
            })
        });
    }
    group.finish();
}

fn bench_row_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_intersect");
    for &n in &[16i32, 256, 4096] {
        let a = comb_row(n, 0);
        let b = comb_row(n, 1);
        group.bench_function(format!("offset_comb_{n}"), |bench| {
            bench.iter(|| {
                let mut out = a.clone();
                out.intersect_row(black_box(&b));
                out
            })
        });
    }
    group.finish();
}

fn bench_region_union(c: &mut Criterion) {
    let mut a = RegionMap::new();
    let mut b = RegionMap::new();
    for y in 0..256 {
        *a.row_mut(y) = comb_row(64, 0);
        *b.row_mut(y - 128) = comb_row(64, 2);
    }
    c.bench_function("region_union_256_rows", |bench| {
        bench.iter(|| {
            let mut out = a.clone();
            out.union(black_box(&b));
            out
        })
    });
}

fn bench_shape_materialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("materialize");
    group.bench_function("circle_r200", |bench| {
        bench.iter(|| {
            let mut shape = ShapeContour::ellipse(0.0, 0.0, 200.0, 200.0, 0.0);
            shape.content().num_rows()
        })
    });
    group.bench_function("hexagon_r200", |bench| {
        bench.iter(|| {
            let mut shape = ShapeContour::regular_polygon(0.0, 0.0, 200.0, 6)
                .expect("enough sides");
            shape.content().num_rows()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_row_union,
    bench_row_subtract,
    bench_row_intersect,
    bench_region_union,
    bench_shape_materialize
);
criterion_main!(benches);

//! Criterion benchmarks driving inserts and scans through the engine.
//!
//! Run with: `cargo bench --bench performance`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use simpledb::engine::Engine;
use tempfile::tempdir;

fn bench_insert_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_select");
    group.sample_size(10);

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let dir = tempdir().unwrap();
                let mut engine = Engine::open(dir.path()).unwrap();
                engine.run_query("CREATE TABLE bench (id INT, name TEXT)");

                for i in 0..size {
                    let sql = format!("INSERT INTO bench VALUES ({i}, 'Name{i}')");
                    engine.run_query(black_box(&sql));
                }

                black_box(engine.run_query(black_box("SELECT * FROM bench")));
            });
        });
    }

    group.finish();
}

fn bench_filtered_scan(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let mut engine = Engine::open(dir.path()).unwrap();
    engine.run_query("CREATE TABLE scan_bench (id INT, val INT)");
    for i in 0..10_000 {
        engine.run_query(&format!("INSERT INTO scan_bench VALUES ({i}, {})", i % 100));
    }

    c.bench_function("select_where", |b| {
        b.iter(|| {
            black_box(engine.run_query(black_box("SELECT id FROM scan_bench WHERE val = 50")));
        });
    });
}

criterion_group!(benches, bench_insert_select, bench_filtered_scan);
criterion_main!(benches);

//! Performance benchmarks for the record-type factory.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use record_factory::{RecordTypeFactory, Value};

fn make_type(field_count: usize) -> std::sync::Arc<record_factory::RecordType> {
    let names: Vec<String> = (0..field_count).map(|i| format!("field_{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    RecordTypeFactory::new().create(&refs).unwrap()
}

/// Benchmark instance construction with varying field counts
fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    for field_count in [2, 8, 32, 128] {
        group.bench_with_input(
            BenchmarkId::new("fields", field_count),
            &field_count,
            |b, &count| {
                let ty = make_type(count);
                let values: Vec<Value> = (0..count as i64).map(Value::from).collect();
                b.iter(|| black_box(ty.construct(values.clone()).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark field access by index vs by name
fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("access");

    let ty = make_type(32);
    let values: Vec<Value> = (0..32).map(Value::from).collect();
    let instance = ty.construct(values).unwrap();

    group.bench_function("get_by_index", |b| {
        b.iter(|| black_box(instance.get(17).unwrap()));
    });

    group.bench_function("get_by_name", |b| {
        b.iter(|| black_box(instance.get("field_17").unwrap()));
    });

    group.bench_function("to_hash", |b| {
        b.iter(|| black_box(instance.to_hash()));
    });

    group.finish();
}

/// Benchmark nested dig traversal
fn bench_dig(c: &mut Criterion) {
    let mut group = c.benchmark_group("dig");

    let factory = RecordTypeFactory::new();
    let inner_ty = factory.create(&["value"]).unwrap();
    let outer_ty = factory.create(&["inner"]).unwrap();

    let inner = inner_ty.construct(vec![5.into()]).unwrap();
    let outer = outer_ty.construct(vec![inner.into()]).unwrap();
    let keys = ["inner".into(), "value".into()];

    group.bench_function("two_levels", |b| {
        b.iter(|| black_box(outer.dig(&keys).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_construct, bench_access, bench_dig);
criterion_main!(benches);

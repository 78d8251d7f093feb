use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dotwalk::{dot, get, merge_distinct_recursive, set, undot, Value};

// ============================================================================
// Test Data: Varying Depth and Breadth
// ============================================================================

fn wide_object(entries: usize) -> Value {
    let mut value = Value::object();
    for i in 0..entries {
        let path = format!("key{i}");
        set(&mut value, Some(&path), Value::from(i as i64)).unwrap();
    }
    value
}

fn deep_object(depth: usize) -> (Value, String) {
    let path = (0..depth)
        .map(|i| format!("level{i}"))
        .collect::<Vec<_>>()
        .join(".");
    let mut value = Value::object();
    set(&mut value, Some(&path), Value::from("leaf")).unwrap();
    (value, path)
}

fn user_list(users: usize) -> Value {
    let mut value = Value::object();
    for i in 0..users {
        let name_path = format!("users.{i}.name");
        set(&mut value, Some(&name_path), Value::from(format!("user{i}"))).unwrap();

        let active_path = format!("users.{i}.meta.active");
        set(&mut value, Some(&active_path), Value::from(i % 2 == 0)).unwrap();
    }
    value
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for depth in [4, 16, 64] {
        let (value, path) = deep_object(depth);
        group.bench_with_input(BenchmarkId::new("deep_path", depth), &depth, |b, _| {
            b.iter(|| get(black_box(&value), black_box(&path)));
        });
    }

    let wide = wide_object(1000);
    group.bench_function("wide_miss", |b| {
        b.iter(|| get(black_box(&wide), black_box("missing.key")));
    });

    group.finish();
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    for depth in [4, 16, 64] {
        let (_, path) = deep_object(depth);
        group.bench_with_input(BenchmarkId::new("fresh_path", depth), &depth, |b, _| {
            b.iter(|| {
                let mut value = Value::object();
                set(&mut value, Some(black_box(&path)), Value::from(1)).unwrap();
                value
            });
        });
    }

    group.finish();
}

fn bench_dot_undot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_undot");

    let value = user_list(100);
    let flat = dot(&value);

    group.bench_function("dot_100_users", |b| {
        b.iter(|| dot(black_box(&value)));
    });
    group.bench_function("undot_100_users", |b| {
        b.iter(|| undot(black_box(&flat)));
    });

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    let left = user_list(100);
    let right = user_list(100);

    group.bench_function("distinct_100_users", |b| {
        b.iter(|| {
            merge_distinct_recursive([black_box(left.clone()), black_box(right.clone())]).unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_get, bench_set, bench_dot_undot, bench_merge);
criterion_main!(benches);

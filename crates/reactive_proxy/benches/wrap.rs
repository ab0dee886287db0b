use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reactive_proxy::{mutable, origin_of, read_only, ObjectRef, PropertyKey, Value};

fn wrap_benchmarks(c: &mut Criterion) {
    let raw = Value::from(ObjectRef::plain_from([("n", 1)]));
    let observed = mutable(&raw);

    c.bench_function("mutable (cached)", |b| b.iter(|| mutable(black_box(&raw))));
    c.bench_function("read_only of mutable wrapper", |b| b.iter(|| read_only(black_box(&observed))));
    c.bench_function("origin_of", |b| b.iter(|| origin_of(black_box(&observed))));

    c.bench_function("mutable (fresh object)", |b| {
        b.iter(|| mutable(&Value::from(ObjectRef::plain())))
    });

    let key = PropertyKey::string("n");
    let object = observed.as_object().cloned();
    c.bench_function("get through wrapper", |b| {
        b.iter(|| {
            object
                .as_ref()
                .map(|object| object.get(black_box(&key)))
        })
    });
}

criterion_group!(benches, wrap_benchmarks);
criterion_main!(benches);

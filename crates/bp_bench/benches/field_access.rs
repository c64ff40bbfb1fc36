//! Cached path reads against direct field access.
//!
//!   field_access/direct/N ..... the same reads written out by hand
//!   field_access/cached/N ..... `AccessorCache::get_field_value` on a warm cache
//!   field_access/global/N ..... the process-wide cache
//!   field_access/resolve/N .... building the accessor from scratch
//!
//! N is the nesting depth, 0 to 3.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use bp_bean::access::{AccessorCache, FieldPath, PathResolver};
use bp_bean::get_field_value;
use bp_bean::info::Typed;
use bp_bench::{JavaBean, PATHS, sample};

fn direct(bean: &JavaBean, depth: usize) -> Option<&String> {
    let mut nested = bean.nested_java_bean.as_deref();
    if depth == 0 {
        return Some(&bean.field_a);
    }
    for _ in 1..depth {
        nested = nested?.nested_java_bean.as_deref();
    }
    nested.map(|n| &n.field_a)
}

fn bench_field_access(c: &mut Criterion) {
    let bean = sample();
    let cache = AccessorCache::new();
    let resolver = PathResolver::default();

    for path in PATHS {
        cache.get_field_value(&bean, path).unwrap();
        get_field_value(&bean, path).unwrap();
    }

    let mut group = c.benchmark_group("field_access");

    for (depth, path) in PATHS.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("direct", depth), &depth, |b, &depth| {
            b.iter(|| black_box(direct(black_box(&bean), depth)));
        });

        group.bench_with_input(BenchmarkId::new("cached", depth), path, |b, path| {
            b.iter(|| black_box(cache.get_field_value(black_box(&bean), path).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("global", depth), path, |b, path| {
            b.iter(|| black_box(get_field_value(black_box(&bean), path).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("resolve", depth), path, |b, path| {
            b.iter(|| {
                let parsed = FieldPath::parse(black_box(path)).unwrap();
                black_box(resolver.build_chain(JavaBean::bean_info(), &parsed).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_field_access);
criterion_main!(benches);

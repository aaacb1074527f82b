//! Router performance benchmarks
//!
//! These benchmarks measure the performance of key router operations:
//! - Pattern compilation and matching
//! - Resolution against tables of growing size
//! - Full request handling including controller dispatch
//! - Route-table fingerprinting

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hook_router::{ControllerDef, Params, RoutePattern, Router, RouterResult, Verb};
use std::hint::black_box;

fn bench_controller() -> ControllerDef<()> {
    ControllerDef::new("BenchController", || ())
        .action("show", |_: &mut (), params: Params| -> RouterResult<usize> {
            Ok(params.len())
        })
}

fn router_with(count: usize) -> Router {
    (0..count).fold(
        Router::new().controller(bench_controller()),
        |router, i| router.get(format!("section{}/{{id}}/page/{{page}}", i), "BenchController", "show"),
    )
}

fn bench_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern");

    group.bench_function("compile", |b| {
        b.iter(|| RoutePattern::compile(black_box("shop/{category}/product/{id}")).unwrap())
    });

    let pattern = RoutePattern::compile("shop/{category}/product/{id}").unwrap();
    group.bench_function("captures_hit", |b| {
        b.iter(|| pattern.captures(black_box("shop/books/product/42")))
    });
    group.bench_function("captures_miss", |b| {
        b.iter(|| pattern.captures(black_box("blog/2024/hello-world")))
    });

    group.finish();
}

fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    for count in [1, 10, 100] {
        let router = router_with(count).compile().unwrap();
        let last = format!("section{}/7/page/2", count - 1);

        group.bench_with_input(BenchmarkId::new("resolve_last", count), &last, |b, path| {
            b.iter(|| black_box(router.resolve(Verb::Get, black_box(path))))
        });
        group.bench_with_input(BenchmarkId::new("resolve_miss", count), &count, |b, _| {
            b.iter(|| black_box(router.resolve(Verb::Get, black_box("unknown/path"))))
        });
    }

    group.finish();
}

fn bench_handle_request(c: &mut Criterion) {
    let router = router_with(10).compile().unwrap();

    c.bench_function("handle_request", |b| {
        b.iter(|| black_box(router.handle_request(Verb::Get, black_box("section5/7/page/2")).unwrap()))
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint");

    for count in [10, 100] {
        let router = router_with(count)
            .post_type("book", "BenchController")
            .table()
            .clone();
        group.bench_with_input(BenchmarkId::from_parameter(count), &router, |b, table| {
            b.iter(|| black_box(table.fingerprint().unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pattern,
    bench_resolution,
    bench_handle_request,
    bench_fingerprint
);
criterion_main!(benches);

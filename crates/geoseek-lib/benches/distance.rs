use criterion::{criterion_group, criterion_main, Criterion};
use geoseek_lib::{distance, distance_approx, load_graph, plan_route, Graph, RouteRequest};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_graph.json")
}

const START: (f64, f64) = (46.58083, 31.51220);
const GOAL: (f64, f64) = (46.42675, 31.71208);

static GRAPH: Lazy<Graph> = Lazy::new(|| load_graph(&fixture_path()).expect("fixture loads"));
static DIJKSTRA_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::dijkstra(START, GOAL));
static ASTAR_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::new(START, GOAL));

fn benchmark_distance(c: &mut Criterion) {
    c.bench_function("haversine", |b| {
        b.iter(|| {
            distance(
                black_box(START.0),
                black_box(START.1),
                black_box(GOAL.0),
                black_box(GOAL.1),
            )
        });
    });

    c.bench_function("planar_approx", |b| {
        b.iter(|| {
            distance_approx(
                black_box(START.0),
                black_box(START.1),
                black_box(GOAL.0),
                black_box(GOAL.1),
            )
        });
    });
}

fn benchmark_routing(c: &mut Criterion) {
    let graph = &*GRAPH;

    c.bench_function("dijkstra_sample", |b| {
        let request = &*DIJKSTRA_REQUEST;
        b.iter(|| {
            let plan = plan_route(graph, request).expect("route exists");
            black_box(plan.distance_m)
        });
    });

    c.bench_function("astar_sample", |b| {
        let request = &*ASTAR_REQUEST;
        b.iter(|| {
            let plan = plan_route(graph, request).expect("route exists");
            black_box(plan.steps.len())
        });
    });
}

criterion_group!(benches, benchmark_distance, benchmark_routing);
criterion_main!(benches);

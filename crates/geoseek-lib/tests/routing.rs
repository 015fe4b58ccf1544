mod common;

use std::fs;

use common::{sample_graph, GOAL, START};
use geoseek_lib::{
    find_route_a_star, find_route_dijkstra, geometry_distance, load_graph, plan_route, EdgeSpec,
    Error, Graph, Heuristic, NodeKey, RouteAlgorithm, RouteRenderMode, RouteRequest, RouteSummary,
};
use tempfile::tempdir;

fn start_key() -> NodeKey {
    NodeKey::from_lat_lng(START.0, START.1)
}

fn goal_key() -> NodeKey {
    NodeKey::from_lat_lng(GOAL.0, GOAL.1)
}

#[test]
fn fixture_graph_loads() {
    let graph = sample_graph();
    assert_eq!(graph.node_count(), 10);
    // Eight two-way edges plus one one-way edge.
    assert_eq!(graph.edge_count(), 17);
}

#[test]
fn dijkstra_finds_the_shortest_path() {
    let graph = sample_graph();
    let outcome = find_route_dijkstra(&graph, start_key(), goal_key()).expect("route exists");

    assert_eq!(
        outcome.steps(),
        vec![
            start_key(),
            NodeKey::from_lat_lng(46.53, 31.58),
            NodeKey::from_lat_lng(46.48, 31.65),
            goal_key(),
        ]
    );
    assert!((outcome.cost() - 23_004.0).abs() < 1.0, "got {}", outcome.cost());
}

#[test]
fn a_star_matches_dijkstra_cost_and_views_fewer_nodes() {
    let graph = sample_graph();
    let dijkstra = find_route_dijkstra(&graph, start_key(), goal_key()).expect("route exists");
    let a_star = find_route_a_star(&graph, start_key(), goal_key(), Heuristic::Haversine)
        .expect("route exists");

    assert!((dijkstra.cost() - a_star.cost()).abs() < 1e-6);
    assert_eq!(dijkstra.steps(), a_star.steps());
    assert!(
        a_star.stats().viewed < dijkstra.stats().viewed,
        "a* viewed {} vs dijkstra {}",
        a_star.stats().viewed,
        dijkstra.stats().viewed
    );
}

#[test]
fn approx_heuristic_finds_the_same_route_in_its_band() {
    let graph = sample_graph();
    let outcome = find_route_a_star(&graph, start_key(), goal_key(), Heuristic::Approx)
        .expect("route exists");
    assert_eq!(outcome.steps().len(), 4);
}

#[test]
fn search_nodes_keep_parent_chain_and_costs() {
    let graph = sample_graph();
    let outcome = find_route_dijkstra(&graph, start_key(), goal_key()).expect("route exists");
    let path = outcome.path();

    assert!(path[0].parent.is_none());
    assert_eq!(path[0].from_start, 0.0);
    for pair in path.windows(2) {
        let parent = pair[1].parent.expect("non-root nodes have parents");
        assert_eq!(outcome.arena().get(parent).map(|n| n.key), Some(pair[0].key));
        assert!(pair[1].from_start > pair[0].from_start);
        assert!(pair[1].from_start <= pair[1].to_end);
    }
}

#[test]
fn disconnected_goal_has_no_route() {
    let graph = sample_graph();
    let island = NodeKey::from_lat_lng(47.0, 32.0);
    assert!(find_route_dijkstra(&graph, start_key(), island).is_none());

    let request = RouteRequest {
        snap: false,
        ..RouteRequest::new(START, (47.0, 32.0))
    };
    let error = plan_route(&graph, &request).expect_err("unreachable");
    assert!(matches!(error, Error::RouteNotFound { .. }));
    assert!(error.to_string().contains("no route found"));
}

#[test]
fn oneway_edge_is_not_traversed_backwards() {
    let graph = sample_graph();
    let from = NodeKey::from_lat_lng(47.01, 32.01);
    let to = NodeKey::from_lat_lng(47.0, 32.0);
    assert!(find_route_dijkstra(&graph, from, to).is_none());
    assert!(find_route_dijkstra(&graph, to, from).is_some());
}

#[test]
fn plan_route_reports_geometry_length() {
    let graph = sample_graph();
    let plan = plan_route(&graph, &RouteRequest::new(START, GOAL)).expect("route exists");

    assert_eq!(plan.algorithm, RouteAlgorithm::AStar);
    assert_eq!(plan.hop_count(), 3);
    assert_eq!(plan.geometry.first(), Some(&[31.5122, 46.58083]));
    assert_eq!(plan.geometry.last(), Some(&[31.71208, 46.42675]));
    assert_eq!(
        plan.distance_m,
        geometry_distance(&plan.geometry).expect("valid geometry")
    );
    assert_eq!(plan.stats.distance.round() as u64, plan.distance_m);
}

#[test]
fn summary_renders_kilometres() {
    let graph = sample_graph();
    let plan = plan_route(&graph, &RouteRequest::dijkstra(START, GOAL)).expect("route exists");
    let summary = RouteSummary::from_plan(&plan).expect("non-empty plan");

    let text = summary.render(RouteRenderMode::PlainText).expect("render");
    assert!(text.contains("Distance: 23.00 km"), "{text}");
    assert!(text.contains("+ 46.58083,31.51220"));
    assert!(text.contains("- 46.42675,31.71208"));
}

/// Short hop over the antimeridian through (0, 180) and a long detour
/// through (0.3, -179.995).
fn antimeridian_graph() -> Graph {
    let edge = |from: [f64; 2], to: [f64; 2]| EdgeSpec {
        from,
        to,
        segment: None,
        oneway: false,
        weight: None,
    };
    Graph::from_edges([
        edge([0.0, 179.99], [0.0, 180.0]),
        edge([0.0, 180.0], [0.0, -179.99]),
        edge([0.0, 179.99], [0.3, -179.995]),
        edge([0.3, -179.995], [0.0, -179.99]),
    ])
    .expect("valid graph")
}

#[test]
fn default_a_star_takes_short_hop_across_antimeridian() {
    let graph = antimeridian_graph();
    let start = NodeKey::from_lat_lng(0.0, 179.99);
    let goal = NodeKey::from_lat_lng(0.0, -179.99);
    let via = NodeKey::from_lat_lng(0.0, 180.0);

    let dijkstra = find_route_dijkstra(&graph, start, goal).expect("route exists");
    let a_star =
        find_route_a_star(&graph, start, goal, Heuristic::Approx).expect("route exists");
    assert_eq!(dijkstra.steps(), vec![start, via, goal]);
    assert_eq!(a_star.steps(), dijkstra.steps());
    assert!((a_star.cost() - dijkstra.cost()).abs() < 1e-6);

    let plan = plan_route(&graph, &RouteRequest::new((0.0, 179.99), (0.0, -179.99)))
        .expect("route exists");
    assert_eq!(plan.steps, vec![start, via, goal]);
    assert_eq!(plan.distance_m, 2225);
}

#[test]
fn load_graph_reports_invalid_json() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"edges\": [").expect("write fixture");

    let error = load_graph(&path).expect_err("invalid json");
    assert!(matches!(error, Error::Json(_)));
}

#[test]
fn load_graph_reports_missing_file() {
    let dir = tempdir().expect("create temp dir");
    let error = load_graph(&dir.path().join("missing.json")).expect_err("missing file");
    assert!(matches!(error, Error::Io(_)));
}

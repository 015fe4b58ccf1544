//! geoseek library entry points.
//!
//! This crate exposes the bookkeeping types used by graph searches over map
//! data (search nodes, node arenas and per-run statistics), the geodesic
//! distance functions used for edge costs and heuristics, and helpers that
//! reduce a found path to a drawable polyline and a total length. A small
//! Dijkstra/A* driver and route planner are built on top of them. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod geo;
pub mod geometry;
pub mod graph;
pub mod node;
pub mod output;
pub mod path;
pub mod routing;
pub mod stats;

pub use error::{Error, Result};
pub use geo::{
    checked_distance, distance, distance_approx, max_admissible_latitude, EARTH_RADIUS_KM,
    LAT_METERS_PER_DEGREE, LNG_METERS_PER_DEGREE,
};
pub use geometry::{geometry_distance, path_segments_geometry, LngLat};
pub use graph::{load_graph, Edge, EdgeSpec, Graph};
pub use node::{Node, NodeArena, NodeId, NodeKey, LL_ROUND};
pub use output::{format_km, RouteRenderMode, RouteSummary};
pub use path::{find_route_a_star, find_route_dijkstra, Heuristic, SearchOutcome};
pub use routing::{
    plan_route, select_planner, AStarPlanner, DijkstraPlanner, RouteAlgorithm, RoutePlan,
    RoutePlanner, RouteRequest,
};
pub use stats::{SearchStats, StatsSnapshot};

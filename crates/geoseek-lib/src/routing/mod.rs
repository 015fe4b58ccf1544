//! Route planning over a [`Graph`].
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search algorithms (Dijkstra, A*)
//! - [`RouteRequest`] - Coordinates and options for one route
//! - [`RoutePlan`] - Planned route result with geometry and statistics
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Example
//!
//! ```no_run
//! use geoseek_lib::{load_graph, plan_route, RouteRequest};
//!
//! # fn main() -> geoseek_lib::Result<()> {
//! let graph = load_graph(std::path::Path::new("roads.json"))?;
//! let request = RouteRequest::new((46.58083, 31.51220), (46.42675, 31.71208));
//! let plan = plan_route(&graph, &request)?;
//! println!("Route: {} m over {} hops", plan.distance_m, plan.hop_count());
//! # Ok(())
//! # }
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geometry::{geometry_distance, LngLat};
use crate::graph::Graph;
use crate::node::NodeKey;
use crate::path::{Heuristic, SearchOutcome};
use crate::stats::StatsSnapshot;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm (no heuristic).
    Dijkstra,
    /// A* search (heuristic guided).
    #[default]
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    /// Start as `(lat, lng)` in degrees.
    pub start: (f64, f64),
    /// Goal as `(lat, lng)` in degrees.
    pub goal: (f64, f64),
    pub algorithm: RouteAlgorithm,
    /// Heuristic used by A*. Ignored by Dijkstra.
    pub heuristic: Heuristic,
    /// Resolve endpoints to the nearest graph node when they do not match a
    /// node key exactly.
    pub snap: bool,
}

impl RouteRequest {
    /// A* request with the default heuristic and endpoint snapping.
    pub fn new(start: (f64, f64), goal: (f64, f64)) -> Self {
        Self {
            start,
            goal,
            algorithm: RouteAlgorithm::AStar,
            heuristic: Heuristic::default(),
            snap: true,
        }
    }

    /// Convenience constructor for Dijkstra routes.
    pub fn dijkstra(start: (f64, f64), goal: (f64, f64)) -> Self {
        Self {
            algorithm: RouteAlgorithm::Dijkstra,
            ..Self::new(start, goal)
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeKey,
    pub goal: NodeKey,
    pub steps: Vec<NodeKey>,
    /// Route length in whole metres.
    pub distance_m: u64,
    /// Flattened `[lng, lat]` geometry of the route.
    pub geometry: Vec<LngLat>,
    pub stats: StatsSnapshot,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a coordinate to a graph node, snapping when allowed.
fn resolve_endpoint(graph: &Graph, (lat, lng): (f64, f64), snap: bool) -> Result<NodeKey> {
    let key = NodeKey::try_from_lat_lng(lat, lng)?;
    if graph.contains(&key) {
        return Ok(key);
    }
    if !snap {
        return Err(Error::UnknownNode { key });
    }

    let snapped = graph.nearest(lat, lng).ok_or(Error::EmptyGraph)?;
    tracing::debug!(%key, %snapped, "snapped endpoint to nearest node");
    Ok(snapped)
}

/// Length of the found path: measured along the geometry when every edge
/// carries one, otherwise the search cost.
fn route_distance(outcome: &SearchOutcome, geometry: &[LngLat]) -> Result<u64> {
    let path = outcome.path();
    let fully_drawn = path.len() > 1 && path.iter().skip(1).all(|node| node.segment.is_some());
    if fully_drawn {
        geometry_distance(geometry)
    } else {
        Ok(outcome.cost().round() as u64)
    }
}

/// Compute a route using the requested algorithm.
///
/// This is the main entry point for route planning. It:
/// 1. Resolves the endpoints to graph nodes
/// 2. Selects the planner strategy
/// 3. Runs the search
/// 4. Reduces the path to geometry and a total distance
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_endpoint(graph, request.start, request.snap)?;
    let goal = resolve_endpoint(graph, request.goal, request.snap)?;

    let planner = select_planner(request);
    let outcome = planner
        .find_path(graph, start, goal)
        .ok_or(Error::RouteNotFound { start, goal })?;

    let geometry = outcome.geometry();
    let distance_m = route_distance(&outcome, &geometry)?;
    let steps = outcome.steps();
    if steps.is_empty() {
        return Err(Error::EmptyRoutePlan);
    }

    tracing::info!(
        algorithm = %request.algorithm,
        hops = steps.len() - 1,
        distance_m,
        "route planned"
    );

    Ok(RoutePlan {
        algorithm: planner.algorithm(),
        start,
        goal,
        steps,
        distance_m,
        geometry,
        stats: outcome.stats().snapshot(),
    })
}

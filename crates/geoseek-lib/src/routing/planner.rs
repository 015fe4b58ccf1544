//! Route planning strategies implementing the Strategy pattern.
//!
//! This module provides the `RoutePlanner` trait and implementations for the
//! supported search algorithms. The strategy pattern allows adding new
//! algorithms without modifying the `plan_route` orchestrator.

use crate::graph::Graph;
use crate::node::NodeKey;
use crate::path::{find_route_a_star, find_route_dijkstra, Heuristic, SearchOutcome};

use super::{RouteAlgorithm, RouteRequest};

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given graph.
    ///
    /// Returns `Some(outcome)` if a route is found, `None` otherwise.
    fn find_path(&self, graph: &Graph, start: NodeKey, goal: NodeKey) -> Option<SearchOutcome>;
}

/// Dijkstra's algorithm planner. Settles nodes strictly by distance from the
/// start.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &Graph, start: NodeKey, goal: NodeKey) -> Option<SearchOutcome> {
        find_route_dijkstra(graph, start, goal)
    }
}

/// A* planner guided by a distance heuristic.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner {
    heuristic: Heuristic,
}

impl AStarPlanner {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(&self, graph: &Graph, start: NodeKey, goal: NodeKey) -> Option<SearchOutcome> {
        find_route_a_star(graph, start, goal, self.heuristic)
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner::new(request.heuristic)),
    }
}

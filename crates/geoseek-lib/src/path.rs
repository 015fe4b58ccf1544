//! Dijkstra and A* search over a [`Graph`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use crate::geo::{distance, distance_approx};
use crate::geometry::{path_segments_geometry, LngLat};
use crate::graph::Graph;
use crate::node::{Node, NodeArena, NodeId, NodeKey};
use crate::stats::SearchStats;

/// Estimate of the remaining distance used to order the A* frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Planar approximation; cheapest, admissible only below
    /// [`crate::max_admissible_latitude`].
    #[default]
    Approx,
    /// Exact great-circle distance; admissible everywhere.
    Haversine,
    /// No estimate; A* degenerates to Dijkstra.
    Zero,
}

impl Heuristic {
    pub fn estimate(self, from: &NodeKey, to: &NodeKey) -> f64 {
        match self {
            Heuristic::Approx => {
                // Take the short way around the antimeridian.
                let d_lng = wrap_longitude_delta(to.lng() - from.lng());
                distance_approx(from.lat(), 0.0, to.lat(), d_lng)
            }
            Heuristic::Haversine => distance(from.lat(), from.lng(), to.lat(), to.lng()),
            Heuristic::Zero => 0.0,
        }
    }
}

/// Map a longitude difference in degrees into `[-180, 180]`.
fn wrap_longitude_delta(d_lng: f64) -> f64 {
    if d_lng > 180.0 {
        d_lng - 360.0
    } else if d_lng < -180.0 {
        d_lng + 360.0
    } else {
        d_lng
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Heuristic::Approx => "approx",
            Heuristic::Haversine => "haversine",
            Heuristic::Zero => "zero",
        };
        f.write_str(value)
    }
}

/// Result of a successful search: the node arena, the goal node and the
/// statistics gathered along the way.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    arena: NodeArena,
    goal: NodeId,
    stats: SearchStats,
}

impl SearchOutcome {
    /// Nodes from start to goal.
    pub fn path(&self) -> Vec<&Node> {
        self.arena.nodes_on_path(self.goal)
    }

    /// Keys from start to goal.
    pub fn steps(&self) -> Vec<NodeKey> {
        self.path().into_iter().map(|node| node.key).collect()
    }

    /// Flattened edge geometry along the path.
    pub fn geometry(&self) -> Vec<LngLat> {
        path_segments_geometry(self.path())
    }

    /// Total weight of the path in metres.
    pub fn cost(&self) -> f64 {
        self.arena
            .get(self.goal)
            .map(|node| node.from_start)
            .unwrap_or(f64::INFINITY)
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn into_stats(self) -> SearchStats {
        self.stats
    }
}

/// Run Dijkstra's algorithm between two graph nodes.
pub fn find_route_dijkstra(graph: &Graph, start: NodeKey, goal: NodeKey) -> Option<SearchOutcome> {
    search(graph, start, goal, Heuristic::Zero)
}

/// Run A* search guided by `heuristic`.
pub fn find_route_a_star(
    graph: &Graph,
    start: NodeKey,
    goal: NodeKey,
    heuristic: Heuristic,
) -> Option<SearchOutcome> {
    search(graph, start, goal, heuristic)
}

fn search(
    graph: &Graph,
    start: NodeKey,
    goal: NodeKey,
    heuristic: Heuristic,
) -> Option<SearchOutcome> {
    if !graph.contains(&start) || !graph.contains(&goal) {
        return None;
    }

    let mut stats = SearchStats::new();
    let mut arena = NodeArena::new();
    let mut queue = BinaryHeap::new();

    let start_id = arena.insert_or_get(start);
    let start_node = arena.get_mut(start_id)?;
    start_node.from_start = 0.0;
    start_node.to_end = heuristic.estimate(&start, &goal);
    queue.push(QueueEntry::new(start_id, start_node.to_end));
    stats.record_queued();

    while let Some(entry) = queue.pop() {
        let node = arena.get(entry.node)?;
        // Stale entry left behind by a later relaxation.
        if entry.priority.0 > node.to_end {
            continue;
        }
        let current_key = node.key;
        let current_cost = node.from_start;
        stats.record_viewed();

        if current_key == goal {
            stats.add_distance(current_cost);
            tracing::debug!(%heuristic, %stats, "route found");
            return Some(SearchOutcome {
                arena,
                goal: entry.node,
                stats,
            });
        }

        for edge in graph.neighbours(&current_key) {
            let tentative = current_cost + edge.distance;
            let next_id = arena.insert_or_get(edge.target);
            let next = arena.get_mut(next_id)?;
            if tentative < next.from_start {
                next.parent = Some(entry.node);
                next.from_start = tentative;
                next.to_end = tentative + heuristic.estimate(&edge.target, &goal);
                next.segment = edge.segment.clone();
                queue.push(QueueEntry::new(next_id, next.to_end));
                stats.record_queued();
            }
        }
    }

    tracing::debug!(%heuristic, %stats, "frontier exhausted without reaching goal");
    None
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    priority: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, priority: f64) -> Self {
        Self {
            node,
            priority: FloatOrd(priority),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//! Road graph built from a JSON edge list.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::geo::{distance, validate_coordinate};
use crate::geometry::{polyline_length, LngLat};
use crate::node::NodeKey;

/// Edge description as read from a graph file.
///
/// Endpoints are `[lat, lng]`; `segment` points are `[lng, lat]`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EdgeSpec {
    pub from: [f64; 2],
    pub to: [f64; 2],
    #[serde(default)]
    pub segment: Option<Vec<LngLat>>,
    /// Only add the `from -> to` direction.
    #[serde(default)]
    pub oneway: bool,
    /// Explicit weight in metres. Derived from the geometry when absent.
    #[serde(default)]
    pub weight: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct GraphFile {
    edges: Vec<EdgeSpec>,
}

/// Edge within the routing graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeKey,
    /// Weight in metres.
    pub distance: f64,
    /// Detailed geometry from the source node to `target`.
    pub segment: Option<Vec<LngLat>>,
}

/// Graph structure used by pathfinding algorithms.
///
/// Immutable once built; clones share the adjacency list.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<NodeKey, Vec<Edge>>>,
}

impl Graph {
    /// Build a graph from edge descriptions.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = EdgeSpec>,
    {
        let mut adjacency: HashMap<NodeKey, Vec<Edge>> = HashMap::new();

        for spec in edges {
            let from = NodeKey::try_from_lat_lng(spec.from[0], spec.from[1])?;
            let to = NodeKey::try_from_lat_lng(spec.to[0], spec.to[1])?;
            if let Some(segment) = &spec.segment {
                for point in segment {
                    validate_coordinate(point[1], point[0])?;
                }
            }

            let weight = edge_weight(&spec, from, to)?;
            let reverse_segment = if spec.oneway {
                None
            } else {
                spec.segment.as_ref().map(|segment| {
                    let mut reversed = segment.clone();
                    reversed.reverse();
                    reversed
                })
            };

            insert_edge(
                &mut adjacency,
                from,
                Edge {
                    target: to,
                    distance: weight,
                    segment: spec.segment,
                },
            );
            if spec.oneway {
                adjacency.entry(to).or_default();
            } else {
                insert_edge(
                    &mut adjacency,
                    to,
                    Edge {
                        target: from,
                        distance: weight,
                        segment: reverse_segment,
                    },
                );
            }
        }

        for edges in adjacency.values_mut() {
            edges.sort_by(|a, b| {
                a.distance.total_cmp(&b.distance).then_with(|| a.target.cmp(&b.target))
            });
        }

        Ok(Self {
            adjacency: Arc::new(adjacency),
        })
    }

    /// Parse a JSON graph document of the form `{"edges": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: GraphFile = serde_json::from_str(json)?;
        Self::from_edges(file.edges)
    }

    /// Return the outgoing edges of a node.
    pub fn neighbours(&self, key: &NodeKey) -> &[Edge] {
        self.adjacency
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.adjacency.contains_key(key)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeKey> {
        self.adjacency.keys()
    }

    /// Closest node to a point by great-circle distance.
    pub fn nearest(&self, lat: f64, lng: f64) -> Option<NodeKey> {
        self.adjacency
            .keys()
            .map(|key| (distance(lat, lng, key.lat(), key.lng()), *key))
            .min_by(|(da, ka), (db, kb)| da.total_cmp(db).then_with(|| ka.cmp(kb)))
            .map(|(_, key)| key)
    }
}

/// Load a JSON graph file from disk.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let json = std::fs::read_to_string(path)?;
    let graph = Graph::from_json_str(&json)?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

fn edge_weight(spec: &EdgeSpec, from: NodeKey, to: NodeKey) -> Result<f64> {
    if let Some(weight) = spec.weight {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { weight });
        }
        return Ok(weight);
    }

    match &spec.segment {
        Some(segment) if segment.len() >= 2 => Ok(polyline_length(segment)),
        _ => Ok(distance(from.lat(), from.lng(), to.lat(), to.lng())),
    }
}

fn insert_edge(adjacency: &mut HashMap<NodeKey, Vec<Edge>>, from: NodeKey, edge: Edge) {
    let entry = adjacency.entry(from).or_default();
    if let Some(existing) = entry.iter_mut().find(|e| e.target == edge.target) {
        if edge.distance < existing.distance {
            *existing = edge;
        }
        return;
    }
    entry.push(edge);
}

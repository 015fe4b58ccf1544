//! Search nodes and the arena that owns them during one search run.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::geo::validate_coordinate;
use crate::geometry::LngLat;

/// Decimal digits kept when rounding coordinates into a [`NodeKey`].
///
/// Five digits is roughly one metre at the equator.
pub const LL_ROUND: u32 = 5;

const SCALE: f64 = 100_000.0;
const SCALE_INT: u32 = 100_000;

/// Identity of a location in a search graph.
///
/// Latitude and longitude are stored as integers scaled by `10^LL_ROUND`, so
/// points that agree after rounding compare and hash equal, and negative zero
/// collapses into zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    lat_e5: i32,
    lng_e5: i32,
}

impl NodeKey {
    /// Round a latitude/longitude pair (degrees) into a key.
    ///
    /// The caller is responsible for passing finite, in-range values; NaN
    /// saturates to zero. Use [`NodeKey::try_from_lat_lng`] to reject it.
    pub fn from_lat_lng(lat: f64, lng: f64) -> Self {
        Self {
            lat_e5: (lat * SCALE).round() as i32,
            lng_e5: (lng * SCALE).round() as i32,
        }
    }

    /// Validated variant of [`NodeKey::from_lat_lng`].
    pub fn try_from_lat_lng(lat: f64, lng: f64) -> Result<Self> {
        validate_coordinate(lat, lng)?;
        Ok(Self::from_lat_lng(lat, lng))
    }

    /// Build a key from a `[lng, lat]` geometry point.
    pub fn from_lng_lat(point: LngLat) -> Self {
        Self::from_lat_lng(point[1], point[0])
    }

    /// Rounded latitude in degrees.
    pub fn lat(&self) -> f64 {
        f64::from(self.lat_e5) / SCALE
    }

    /// Rounded longitude in degrees.
    pub fn lng(&self) -> f64 {
        f64::from(self.lng_e5) / SCALE
    }

    /// The key as a `[lng, lat]` geometry point.
    pub fn to_lng_lat(&self) -> LngLat {
        [self.lng(), self.lat()]
    }
}

fn write_fixed(f: &mut fmt::Formatter<'_>, value: i32) -> fmt::Result {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    write!(f, "{sign}{}.{:05}", abs / SCALE_INT, abs % SCALE_INT)
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed(f, self.lat_e5)?;
        f.write_str(",")?;
        write_fixed(f, self.lng_e5)
    }
}

impl FromStr for NodeKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidKey {
            input: s.to_string(),
        };
        let (lat, lng) = s.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
        Self::try_from_lat_lng(lat, lng)
    }
}

impl Serialize for NodeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Index of a [`Node`] inside its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// One visited or frontier point of a graph search.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub key: NodeKey,
    /// Predecessor on the best known path; `None` for the start node.
    pub parent: Option<NodeId>,
    /// Cumulative weight from the start (g).
    pub from_start: f64,
    /// `from_start` plus the heuristic to the goal (f). Frontier sort key.
    pub to_end: f64,
    /// `[lng, lat]` geometry of the edge leading into this node.
    pub segment: Option<Vec<LngLat>>,
}

impl Node {
    pub fn new(key: NodeKey) -> Self {
        Self {
            key,
            parent: None,
            from_start: f64::INFINITY,
            to_end: 0.0,
            segment: None,
        }
    }
}

/// Dense storage for the nodes of one search run.
///
/// Parents are stored as [`NodeId`] indices into the arena.
#[derive(Debug, Default, Clone)]
pub struct NodeArena {
    nodes: Vec<Node>,
    index: HashMap<NodeKey, NodeId>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node for `key`, creating a fresh one on first sight.
    pub fn insert_or_get(&mut self, key: NodeKey) -> NodeId {
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(key));
        self.index.insert(key, id);
        id
    }

    pub fn id_of(&self, key: &NodeKey) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parents from `id` back to the root and return the ids in
    /// root-to-`id` order.
    ///
    /// The walk stops after `len()` steps, so a parent cycle cannot hang it.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.get(id).map(|_| id);
        while let Some(node_id) = current {
            if path.len() >= self.nodes.len() {
                break;
            }
            path.push(node_id);
            current = self.nodes[node_id.0].parent;
        }
        path.reverse();
        path
    }

    /// Nodes on the path from the root to `id`.
    pub fn nodes_on_path(&self, id: NodeId) -> Vec<&Node> {
        self.path_to(id)
            .into_iter()
            .map(|node_id| &self.nodes[node_id.0])
            .collect()
    }
}

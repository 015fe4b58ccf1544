//! Shared fixtures for integration tests.

use std::path::PathBuf;

use geoseek_lib::{load_graph, Graph};

/// Start of the sample route (lat, lng).
#[allow(dead_code)]
pub const START: (f64, f64) = (46.58083, 31.51220);

/// End of the sample route (lat, lng).
#[allow(dead_code)]
pub const GOAL: (f64, f64) = (46.42675, 31.71208);

/// Path to the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// The sample road graph used by routing tests.
#[allow(dead_code)]
pub fn sample_graph() -> Graph {
    load_graph(&fixtures_dir().join("sample_graph.json")).expect("fixture graph loads")
}

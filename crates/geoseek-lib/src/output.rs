//! Route summaries for display and serialisation.

use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geometry::LngLat;
use crate::node::NodeKey;
use crate::routing::{RouteAlgorithm, RoutePlan};
use crate::stats::StatsSnapshot;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteRenderMode {
    #[default]
    PlainText,
    Json,
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub start: NodeKey,
    pub goal: NodeKey,
    pub distance_m: u64,
    pub distance: String,
    pub steps: Vec<NodeKey>,
    pub geometry: Vec<LngLat>,
    pub stats: StatsSnapshot,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary.
    pub fn from_plan(plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            start: plan.start,
            goal: plan.goal,
            distance_m: plan.distance_m,
            distance: format_km(plan.distance_m as f64),
            steps: plan.steps.clone(),
            geometry: plan.geometry.clone(),
            stats: plan.stats,
        })
    }

    /// Render the summary in the requested mode.
    pub fn render(&self, mode: RouteRenderMode) -> Result<String> {
        match mode {
            RouteRenderMode::PlainText => Ok(self.render_plain()),
            RouteRenderMode::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route from {} to {} ({} hops, algorithm: {}):",
            self.start, self.goal, self.hops, self.algorithm
        );
        for (index, step) in self.steps.iter().enumerate() {
            let marker = if index == 0 {
                '+'
            } else if index + 1 == self.steps.len() {
                '-'
            } else {
                '|'
            };
            let _ = writeln!(buffer, "{marker} {step}");
        }
        let _ = writeln!(buffer, "Distance: {}", self.distance);
        let _ = writeln!(buffer, "Points: {}", self.geometry.len());
        let _ = write!(
            buffer,
            "Search: queued {}, viewed {}, {} ms",
            self.stats.queued, self.stats.viewed, self.stats.elapsed_ms
        );
        buffer
    }
}

/// Format metres as kilometres with two decimals, e.g. `"24.48 km"`.
pub fn format_km(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> RoutePlan {
        RoutePlan {
            algorithm: RouteAlgorithm::Dijkstra,
            start: NodeKey::from_lat_lng(0.0, 0.0),
            goal: NodeKey::from_lat_lng(0.0, 0.02),
            steps: vec![
                NodeKey::from_lat_lng(0.0, 0.0),
                NodeKey::from_lat_lng(0.0, 0.01),
                NodeKey::from_lat_lng(0.0, 0.02),
            ],
            distance_m: 2224,
            geometry: vec![[0.0, 0.0], [0.02, 0.0]],
            stats: StatsSnapshot {
                queued: 3,
                viewed: 3,
                elapsed_ms: 0,
                distance: 2224.5,
            },
        }
    }

    #[test]
    fn format_km_rounds_to_two_decimals() {
        assert_eq!(format_km(24_480.4), "24.48 km");
        assert_eq!(format_km(0.0), "0.00 km");
        assert_eq!(format_km(329_920.0), "329.92 km");
    }

    #[test]
    fn plain_text_lists_steps() {
        let summary = RouteSummary::from_plan(&plan()).expect("non-empty plan");
        let text = summary.render(RouteRenderMode::PlainText).expect("render");
        assert!(text.contains("algorithm: dijkstra"));
        assert!(text.contains("+ 0.00000,0.00000"));
        assert!(text.contains("| 0.00000,0.01000"));
        assert!(text.contains("- 0.00000,0.02000"));
        assert!(text.contains("Distance: 2.22 km"));
    }

    #[test]
    fn json_uses_string_keys() {
        let summary = RouteSummary::from_plan(&plan()).expect("non-empty plan");
        let json = summary.render(RouteRenderMode::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["start"], "0.00000,0.00000");
        assert_eq!(value["distance_m"], 2224);
        assert_eq!(value["algorithm"], "dijkstra");
    }

    #[test]
    fn empty_plan_is_rejected() {
        let mut plan = plan();
        plan.steps.clear();
        assert!(matches!(
            RouteSummary::from_plan(&plan),
            Err(Error::EmptyRoutePlan)
        ));
    }
}

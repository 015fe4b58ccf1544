// CLI subcommand handlers. main.rs parses arguments and dispatches here.

pub mod distance;
pub mod key;
pub mod route;

use clap::ValueEnum;
use geoseek_lib::{Heuristic, RouteAlgorithm};

/// Parse a `"lat, lng"` argument.
pub fn parse_point(value: &str) -> Result<(f64, f64), String> {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| format!("expected 'lat, lng', got '{value}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lng.trim()))?;
    Ok((lat, lng))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Dijkstra,
    #[value(name = "a-star")]
    AStar,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    Approx,
    Haversine,
    Zero,
}

impl From<HeuristicArg> for Heuristic {
    fn from(value: HeuristicArg) -> Self {
        match value {
            HeuristicArg::Approx => Heuristic::Approx,
            HeuristicArg::Haversine => Heuristic::Haversine,
            HeuristicArg::Zero => Heuristic::Zero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_spaces_and_signs() {
        assert_eq!(parse_point("46.58083, 31.51220"), Ok((46.58083, 31.5122)));
        assert_eq!(parse_point("-33.8,151.2"), Ok((-33.8, 151.2)));
    }

    #[test]
    fn parse_point_rejects_garbage() {
        assert!(parse_point("46.5").is_err());
        assert!(parse_point("north, 31.5").is_err());
    }
}

//! Route command handler.

use std::path::PathBuf;

use anyhow::{Context, Result};

use geoseek_lib::{
    load_graph, plan_route, Heuristic, RouteAlgorithm, RouteRenderMode, RouteRequest,
    RouteSummary,
};

use crate::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub graph: PathBuf,
    /// Start as `(lat, lng)`.
    pub from: (f64, f64),
    /// Goal as `(lat, lng)`.
    pub to: (f64, f64),
    pub algorithm: RouteAlgorithm,
    pub heuristic: Heuristic,
    /// Snap endpoints to the nearest graph node.
    pub snap: bool,
}

pub fn handle_route(args: &RouteCommandArgs, format: OutputFormat) -> Result<()> {
    let graph = load_graph(&args.graph)
        .with_context(|| format!("failed to load graph from {}", args.graph.display()))?;

    let request = RouteRequest {
        start: args.from,
        goal: args.to,
        algorithm: args.algorithm,
        heuristic: args.heuristic,
        snap: args.snap,
    };
    tracing::debug!(
        algorithm = %request.algorithm,
        heuristic = %request.heuristic,
        snap = request.snap,
        "planning route"
    );
    let plan = plan_route(&graph, &request)?;
    let summary = RouteSummary::from_plan(&plan)?;

    let mode = match format {
        OutputFormat::Text => RouteRenderMode::PlainText,
        OutputFormat::Json => RouteRenderMode::Json,
    };
    println!("{}", summary.render(mode)?);
    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod logging;

use commands::route::RouteCommandArgs;
use commands::{parse_point, AlgorithmArg, HeuristicArg};
use logging::{init_logging, LogFormat};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Geodesic distance and shortest-path utilities")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Great-circle distance between two points.
    Distance {
        /// First point as "lat, lng".
        #[arg(long = "from", value_parser = parse_point, allow_hyphen_values = true)]
        from: (f64, f64),
        /// Second point as "lat, lng".
        #[arg(long = "to", value_parser = parse_point, allow_hyphen_values = true)]
        to: (f64, f64),
        /// Use the planar approximation instead of haversine.
        #[arg(long)]
        approx: bool,
    },
    /// Print the canonical node key for a coordinate.
    Key {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
    /// Compute a route between two points of a JSON road graph.
    Route {
        /// Graph file with an `edges` array.
        #[arg(long)]
        graph: PathBuf,
        /// Start point as "lat, lng".
        #[arg(long = "from", value_parser = parse_point, allow_hyphen_values = true)]
        from: (f64, f64),
        /// Goal point as "lat, lng".
        #[arg(long = "to", value_parser = parse_point, allow_hyphen_values = true)]
        to: (f64, f64),
        #[arg(long, value_enum, default_value_t = AlgorithmArg::AStar)]
        algorithm: AlgorithmArg,
        /// Distance estimate guiding A*.
        #[arg(long, value_enum, default_value_t = HeuristicArg::Approx)]
        heuristic: HeuristicArg,
        /// Require both endpoints to be graph nodes.
        #[arg(long)]
        no_snap: bool,
    },
}

fn main() -> Result<()> {
    init_logging(LogFormat::from_env());
    let cli = Cli::parse();

    match cli.command {
        Command::Distance { from, to, approx } => {
            commands::distance::handle_distance(from, to, approx, cli.format)
        }
        Command::Key { lat, lng } => commands::key::handle_key(lat, lng, cli.format),
        Command::Route {
            graph,
            from,
            to,
            algorithm,
            heuristic,
            no_snap,
        } => commands::route::handle_route(
            &RouteCommandArgs {
                graph,
                from,
                to,
                algorithm: algorithm.into(),
                heuristic: heuristic.into(),
                snap: !no_snap,
            },
            cli.format,
        ),
    }
}

use anyhow::{Context, Result};
use geoseek_lib::{checked_distance, distance_approx, format_km};
use serde_json::json;

use crate::OutputFormat;

pub fn handle_distance(
    from: (f64, f64),
    to: (f64, f64),
    approx: bool,
    format: OutputFormat,
) -> Result<()> {
    // checked_distance validates both points for the approximation too.
    let exact = checked_distance(from.0, from.1, to.0, to.1).context("invalid input point")?;
    let (meters, method) = if approx {
        (distance_approx(from.0, from.1, to.0, to.1), "approx")
    } else {
        (exact, "haversine")
    };

    match format {
        OutputFormat::Text => {
            println!("Distance ({method}): {} m ({})", meters.round(), format_km(meters));
        }
        OutputFormat::Json => {
            let value = json!({
                "from": [from.0, from.1],
                "to": [to.0, to.1],
                "method": method,
                "distance_m": meters.round() as u64,
                "distance": format_km(meters),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

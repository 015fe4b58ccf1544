use anyhow::{Context, Result};
use geoseek_lib::NodeKey;
use serde_json::json;

use crate::OutputFormat;

pub fn handle_key(lat: f64, lng: f64, format: OutputFormat) -> Result<()> {
    let key = NodeKey::try_from_lat_lng(lat, lng).context("cannot build node key")?;
    match format {
        OutputFormat::Text => println!("{key}"),
        OutputFormat::Json => {
            let value = json!({ "key": key, "lat": key.lat(), "lng": key.lng() });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

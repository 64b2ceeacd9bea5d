mod data;

use std::path::Path;

use anyhow::{Context, Result};

/// Run the dashboard pipeline on a launch CSV and print the resulting
/// bundle as JSON. The web layer consumes exactly this structure; running
/// the binary is the quickest way to eyeball what the charts will receive.
fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "static/mission_launches.csv".to_string());

    let dashboard = data::build_dashboard(Path::new(&path))
        .with_context(|| format!("building dashboard from {path}"))?;

    log::info!(
        "computed dashboard for {} launches across {} organisations",
        dashboard.shape.0,
        dashboard.missions_per_org.len()
    );

    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}

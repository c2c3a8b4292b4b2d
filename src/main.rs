use anyhow::{Context, Result};
use envelope_loss::{config, scenario::ProjectDescription, telemetry};
use config::Config;
use serde::Serialize;
use std::path::PathBuf;
use telemetry::init_tracing;
use tracing::info;

use envelope_loss::calc::ReportRow;
use envelope_loss::domain::ClimateZone;

#[derive(Debug, Serialize)]
struct Output<'a> {
    climate_zone: ClimateZone,
    rows: &'a [ReportRow],
    total_w_per_k: f64,
    heating_power_kw: f64,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load()?;

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: envelope-loss <scenario.toml|scenario.json>")?;

    let project = ProjectDescription::from_path(&path)?.build()?;
    let report = project.compute_total_heat_loss_with(&cfg.thermal_bridges);
    let zone = project.climate_zone();
    let power = cfg.design.conditions().heating_power(report.total_w_per_k, zone);

    info!(%zone, total_w_per_k = report.total_w_per_k, heating_power = %power, "study complete");

    let output = Output {
        climate_zone: zone,
        rows: &report.rows,
        total_w_per_k: report.total_w_per_k,
        heating_power_kw: power.as_kilowatts(),
    };
    let json = if cfg.report.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");
    Ok(())
}

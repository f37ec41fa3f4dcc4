//! Demo run
//!
//! Seeds a book, quotes with the chosen strategy against random taker flow,
//! and writes the full run export to a JSON file.
//!
//! Flags: `--steps N --depth N --seed N --strategy inventory-skew|avellaneda-stoikov --out PATH`

use anyhow::{bail, Result};
use simulation::driver::{run, SimConfig, StrategyChoice};
use simulation::export;

fn flag_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();

    if let Some(value) = flag_value(&args, "--steps") {
        config.steps = value.parse()?;
    }
    if let Some(value) = flag_value(&args, "--depth") {
        config.depth = value.parse()?;
    }
    if let Some(value) = flag_value(&args, "--seed") {
        config.seed = value.parse()?;
    }
    if let Some(value) = flag_value(&args, "--strategy") {
        config.strategy = match value.as_str() {
            "inventory-skew" => StrategyChoice::InventorySkew,
            "avellaneda-stoikov" => StrategyChoice::AvellanedaStoikov,
            other => bail!("unknown strategy: {other}"),
        };
    }
    let out_path = flag_value(&args, "--out").unwrap_or_else(|| "simulation_run.json".to_string());

    let summary = run(&config);
    tracing::info!("{}", summary.metrics.summary());

    let export = export::build_export(&config, &summary);
    export::write_to_file(&export, &out_path)?;
    tracing::info!(path = %out_path, "export written");

    Ok(())
}

//! Run export
//!
//! Serializes a complete run (config echo, metrics, reports) to JSON for
//! external consumption.

use crate::driver::{RunSummary, SimConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Combined export containing all run outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationExport {
    pub version: String,
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub config: SimConfig,
    pub metrics: crate::metrics::SimMetrics,
    pub fills: Vec<crate::reports::fills::FillRecord>,
    pub pnl: Vec<crate::reports::pnl::LedgerRecord>,
    pub depth: Vec<crate::reports::depth::DepthSnapshot>,
}

/// Build a complete export from a finished run.
pub fn build_export(config: &SimConfig, summary: &RunSummary) -> SimulationExport {
    SimulationExport {
        version: crate::VERSION.to_string(),
        run_id: Uuid::now_v7(),
        generated_at: Utc::now(),
        config: config.clone(),
        metrics: summary.metrics.clone(),
        fills: summary.fills.clone(),
        pnl: summary.pnl.clone(),
        depth: summary.depth.clone(),
    }
}

/// Export as pretty-printed JSON.
pub fn export_json(export: &SimulationExport) -> String {
    serde_json::to_string_pretty(export).unwrap_or_default()
}

/// Write the export to a file path.
pub fn write_to_file(export: &SimulationExport, path: &str) -> std::io::Result<()> {
    std::fs::write(path, export_json(export))
}

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::models::{ScenarioSummary, SimulationReport};
use crate::utils::SimError;

pub const COMPLETION_MESSAGE: &str = "Simulation completed successfully.";

/// Renders the human-readable run log: the completion line, one mean line per
/// scenario, then one max/min line per scenario.
pub fn render_log(summaries: &[ScenarioSummary]) -> String {
    let mut out = format!("{}\n", COMPLETION_MESSAGE);
    for s in summaries {
        out.push_str(&format!("{} output mean: {:.3}\n", s.name, s.output.mean));
    }
    for s in summaries {
        out.push_str(&format!("{} max: {:.3}, min: {:.3}\n", s.name, s.output.max, s.output.min));
    }
    out
}

/// Writes the run log to `path`, replacing any previous one.
pub fn write_log(summaries: &[ScenarioSummary], path: &Path) -> Result<(), SimError> {
    write_text(path, render_log(summaries).as_bytes()).map_err(SimError::Log)
}

/// Writes the machine-readable summary to `path` as pretty JSON.
pub fn write_json_summary(report: &SimulationReport, path: &Path) -> Result<(), SimError> {
    let json = serde_json::to_vec_pretty(report).map_err(|e| SimError::Log(io::Error::from(e)))?;
    write_text(path, &json).map_err(SimError::Log)
}

fn write_text(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(bytes)?;
    w.flush()
}

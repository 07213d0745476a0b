mod scenario;
pub use scenario::*;
mod stats;
pub use stats::*;

use std::path::PathBuf;

use chrono::Local;
use slog::{Logger, debug, info};

use crate::models::SimulationReport;
use crate::output;
use crate::utils::{self, SimError};

pub const OUTPUT_DIR: &str = "outputs";
pub const LOG_FILE: &str = "logs.txt";
pub const JSON_SUMMARY_FILE: &str = "summary.json";

/// Settings resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub output_dir: PathBuf,
    pub write_json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            output_dir: PathBuf::from(OUTPUT_DIR),
            write_json: false,
        }
    }
}

/// Runs both scenarios, then writes their plots and the run log into `config.output_dir`.
pub fn run_simulation(config: &SimConfig, logger: &Logger) -> Result<SimulationReport, SimError> {
    output::ensure_plot_backend()?;

    let out_dir = &config.output_dir;
    utils::create_folder(out_dir)
        .map_err(|e| SimError::Plot(format!("could not create {}: {}", out_dir.display(), e)))?;
    info!(logger, "Starting simulation"; "output_dir" => out_dir.display().to_string());

    let scenarios = build_scenarios();
    let mut files = Vec::new();

    for scenario in &scenarios {
        debug!(logger, "Simulated scenario";
            "title" => &scenario.title,
            "gain" => scenario.system.gain,
            "decay" => scenario.system.decay,
            "samples" => scenario.output.len());

        let file_name = scenario.plot_file_name();
        output::plot_scenario(scenario, &out_dir.join(&file_name))?;
        info!(logger, "Saved plot"; "title" => &scenario.title, "file" => &file_name);
        files.push(file_name);
    }

    let summaries: Vec<_> = scenarios.iter().map(Scenario::summary).collect();
    output::write_log(&summaries, &out_dir.join(LOG_FILE))?;
    info!(logger, "Saved run log"; "file" => LOG_FILE);
    files.push(LOG_FILE.to_string());

    let mut report = SimulationReport {
        generated_at: Local::now().to_rfc3339(),
        output_dir: out_dir.display().to_string(),
        files,
        scenarios: summaries,
    };

    if config.write_json {
        report.files.push(JSON_SUMMARY_FILE.to_string());
        output::write_json_summary(&report, &out_dir.join(JSON_SUMMARY_FILE))?;
        info!(logger, "Saved JSON summary"; "file" => JSON_SUMMARY_FILE);
    }

    Ok(report)
}

use serde::Serialize;

use crate::simulation::SignalStats;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub title: String,
    pub gain: f64,
    pub decay: f64,
    pub samples: usize,
    pub output: SignalStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub generated_at: String,
    pub output_dir: String,
    pub files: Vec<String>,
    pub scenarios: Vec<ScenarioSummary>,
}

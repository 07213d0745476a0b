use std::io;

use thiserror::Error;

/// Failures that abort a simulation run. Each one maps to a process exit code.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Error: plotting support is not available. Rebuild with `--features plot`")]
    PlotUnavailable,

    #[error("Error generating plots: {0}")]
    Plot(String),

    #[error("Error writing logs: {0}")]
    Log(#[source] io::Error),
}

impl SimError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SimError::PlotUnavailable | SimError::Plot(_) | SimError::Log(_) => 1,
        }
    }
}

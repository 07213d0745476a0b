/// Gain used when a caller does not pick one.
pub const DEFAULT_GAIN: f64 = 1.0;
/// Decay used when a caller does not pick one.
pub const DEFAULT_DECAY: f64 = 0.1;

/// Simulates a first-order discrete-time system driven by `input`.
///
/// The output starts at rest (`y[0] = 0`) and every later sample moves towards
/// the input by a fraction of the current error:
///
/// ```text
/// y[t] = y[t-1] + gain * (x[t] - y[t-1]) * decay
/// ```
///
/// Neither parameter is range-checked. A `gain * decay` product outside
/// `(0, 2)` makes the recurrence oscillate or diverge, and that is left to the
/// caller. An empty input yields an empty output.
pub fn system_model(input: &[f64], gain: f64, decay: f64) -> Vec<f64> {
    let mut output = vec![0.0; input.len()];
    for t in 1..input.len() {
        let prev = output[t - 1];
        output[t] = prev + gain * (input[t] - prev) * decay;
    }
    output
}

/// The two parameters of a first-order system, bundled as a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstOrderSystem {
    pub gain: f64,
    pub decay: f64,
}

impl FirstOrderSystem {
    pub fn new(gain: f64, decay: f64) -> Self {
        FirstOrderSystem { gain, decay }
    }

    /// Runs `input` through the system. Holds no state between calls.
    pub fn respond(&self, input: &[f64]) -> Vec<f64> {
        system_model(input, self.gain, self.decay)
    }
}

impl Default for FirstOrderSystem {
    fn default() -> Self {
        FirstOrderSystem::new(DEFAULT_GAIN, DEFAULT_DECAY)
    }
}

use crate::models::ScenarioSummary;
use crate::simulation::SignalStats;
use crate::system::{self, FirstOrderSystem};

// 10 seconds sampled at 500 points
const TIME_START: f64 = 0.0;
const TIME_STOP: f64 = 10.0;
const SAMPLES: usize = 500;

const STEP_GAIN: f64 = 0.5;
const STEP_DECAY: f64 = 0.05;

/// One canned input driven through a first-order system.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub title: String,
    pub file_stem: String,
    pub system: FirstOrderSystem,
    pub time: Vec<f64>,
    pub input: Vec<f64>,
    pub output: Vec<f64>,
}

impl Scenario {
    /// Builds the scenario and computes its response right away.
    pub fn new(
        name: &str,
        title: &str,
        file_stem: &str,
        system: FirstOrderSystem,
        time: Vec<f64>,
        input: Vec<f64>,
    ) -> Self {
        let output = system.respond(&input);
        Scenario {
            name: name.to_string(),
            title: title.to_string(),
            file_stem: file_stem.to_string(),
            system,
            time,
            input,
            output,
        }
    }

    pub fn plot_file_name(&self) -> String {
        format!("{}.png", self.file_stem)
    }

    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            name: self.name.clone(),
            title: self.title.clone(),
            gain: self.system.gain,
            decay: self.system.decay,
            samples: self.output.len(),
            output: SignalStats::of(&self.output).unwrap_or_else(SignalStats::undefined),
        }
    }
}

/// The sinusoidal and step scenarios, in reporting order.
pub fn build_scenarios() -> Vec<Scenario> {
    let time = system::linspace(TIME_START, TIME_STOP, SAMPLES);
    let sine = system::sine(&time);
    let step = system::step(&time);

    vec![
        Scenario::new(
            "Scenario 1",
            "Scenario 1: Sinusoidal Input",
            "scenario1",
            FirstOrderSystem::default(),
            time.clone(),
            sine,
        ),
        Scenario::new(
            "Scenario 2",
            "Scenario 2: Step Input",
            "scenario2",
            FirstOrderSystem::new(STEP_GAIN, STEP_DECAY),
            time,
            step,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_scenarios_layout() {
        let scenarios = build_scenarios();
        assert_eq!(scenarios.len(), 2);
        for scenario in &scenarios {
            assert_eq!(scenario.time.len(), SAMPLES);
            assert_eq!(scenario.input.len(), SAMPLES);
            assert_eq!(scenario.output.len(), SAMPLES);
            assert_eq!(scenario.output[0], 0.0);
        }
        assert_eq!(scenarios[0].plot_file_name(), "scenario1.png");
        assert_eq!(scenarios[1].plot_file_name(), "scenario2.png");
        assert_eq!(scenarios[0].system, FirstOrderSystem::new(1.0, 0.1));
        assert_eq!(scenarios[1].system, FirstOrderSystem::new(0.5, 0.05));
    }

    #[test]
    fn test_sine_response_stays_bounded() {
        let scenarios = build_scenarios();
        let sine = &scenarios[0];
        assert!(sine.output.iter().all(|y| y.abs() <= 1.0));
        // the lagging response still swings both ways over 10 seconds
        let stats = sine.summary().output;
        assert!(stats.max > 0.5);
        assert!(stats.min < -0.5);
    }

    #[test]
    fn test_step_response_settles_on_input_level() {
        let scenarios = build_scenarios();
        let step = &scenarios[1];
        let last = step.output[SAMPLES - 1];
        assert!((last - 1.0).abs() < 1e-2);
        assert!(step.output.windows(2).all(|p| p[1] > p[0]));

        let summary = step.summary();
        assert_eq!(summary.samples, SAMPLES);
        assert_eq!(summary.output.min, 0.0);
        assert_eq!(summary.output.max, last);
    }
}

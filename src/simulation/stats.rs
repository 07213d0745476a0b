use serde::Serialize;

/// Summary statistics of a signal, as reported in the run log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

impl SignalStats {
    /// Computes mean, max and min of `values`. Returns `None` when there is
    /// nothing to summarise.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sum: f64 = values.iter().sum();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        Some(SignalStats {
            mean: sum / values.len() as f64,
            max,
            min,
        })
    }

    /// Placeholder for an empty signal; formats as `NaN` in the log.
    pub fn undefined() -> Self {
        SignalStats {
            mean: f64::NAN,
            max: f64::NAN,
            min: f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_of_known_values() {
        let stats = SignalStats::of(&[1.0, -2.0, 4.0, 1.0]).unwrap();
        assert_eq!(stats.mean, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.min, -2.0);
    }

    #[test]
    fn test_stats_of_single_value() {
        let stats = SignalStats::of(&[0.25]).unwrap();
        assert_eq!(stats, SignalStats { mean: 0.25, max: 0.25, min: 0.25 });
    }

    #[test]
    fn test_stats_of_empty_is_none() {
        assert!(SignalStats::of(&[]).is_none());
        assert!(SignalStats::undefined().mean.is_nan());
    }
}

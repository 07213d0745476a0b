/// Returns `num` evenly spaced samples over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sinusoidal input, `sin(t)` sampled at each instant of `time`.
pub fn sine(time: &[f64]) -> Vec<f64> {
    time.iter().map(|&t| t.sin()).collect()
}

/// Unit step, one sample of `1.0` per instant of `time`.
pub fn step(time: &[f64]) -> Vec<f64> {
    vec![1.0; time.len()]
}

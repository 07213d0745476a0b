use std::path::Path;

use crate::simulation::Scenario;
use crate::utils::SimError;

/// Whether this build can render plots at all.
pub fn plot_available() -> bool {
    cfg!(feature = "plot")
}

/// Fails fast when the binary was built without a plotting backend.
pub fn ensure_plot_backend() -> Result<(), SimError> {
    if plot_available() {
        Ok(())
    } else {
        Err(SimError::PlotUnavailable)
    }
}

/// Renders the input and output traces of `scenario` as a PNG line chart at `output_path`.
pub fn plot_scenario(scenario: &Scenario, output_path: &Path) -> Result<(), SimError> {
    #[cfg(feature = "plot")]
    {
        chart::render(&scenario.time, &scenario.input, &scenario.output, output_path)
    }

    #[cfg(not(feature = "plot"))]
    {
        let _ = (scenario, output_path);
        Err(SimError::PlotUnavailable)
    }
}

#[cfg(feature = "plot")]
mod chart {
    use std::fs::File;
    use std::io::{BufWriter, Write};
    use std::path::Path;

    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};
    use plotters::prelude::*;

    use crate::utils::SimError;

    pub(super) const WIDTH: u32 = 640;
    pub(super) const HEIGHT: u32 = 480;

    const GRID_LINES: usize = 6;
    const Y_PADDING: f64 = 0.05;

    const FRAME: RGBColor = RGBColor(64, 64, 64);
    const GRID: RGBColor = RGBColor(225, 225, 225);
    const ZERO_LINE: RGBColor = RGBColor(160, 160, 160);
    pub(super) const INPUT_COLOR: RGBColor = RGBColor(31, 119, 180);
    pub(super) const OUTPUT_COLOR: RGBColor = RGBColor(255, 127, 14);

    fn plot_err(e: impl std::fmt::Display) -> SimError {
        SimError::Plot(e.to_string())
    }

    /// Min and max of `values`, widened by `pad` of the span. A flat series gets a unit band.
    pub(super) fn padded_bounds<'a>(values: impl IntoIterator<Item = &'a f64>, pad: f64) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        let span = hi - lo;
        if span > 0.0 {
            (lo - pad * span, hi + pad * span)
        } else {
            (lo - 1.0, hi + 1.0)
        }
    }

    pub(super) fn render(
        time: &[f64],
        input: &[f64],
        output: &[f64],
        output_path: &Path,
    ) -> Result<(), SimError> {
        if time.is_empty() {
            return Err(SimError::Plot("nothing to plot".into()));
        }
        if input.len() != time.len() || output.len() != time.len() {
            return Err(SimError::Plot(format!(
                "series length mismatch: time {}, input {}, output {}",
                time.len(),
                input.len(),
                output.len()
            )));
        }
        if !time.iter().chain(input).chain(output).all(|v| v.is_finite()) {
            return Err(SimError::Plot("series contains non-finite values".into()));
        }

        let (x_lo, x_hi) = padded_bounds(time, 0.0);
        let (y_lo, y_hi) = padded_bounds(input.iter().chain(output), Y_PADDING);

        let mut buf = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (WIDTH, HEIGHT)).into_drawing_area();
            root.fill(&WHITE).map_err(plot_err)?;

            let mut chart = ChartBuilder::on(&root)
                .margin(24)
                .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
                .map_err(plot_err)?;

            // No label areas are configured, so the mesh only draws grid lines.
            chart
                .configure_mesh()
                .x_labels(GRID_LINES)
                .y_labels(GRID_LINES)
                .bold_line_style(GRID.stroke_width(1))
                .light_line_style(WHITE.stroke_width(1))
                .draw()
                .map_err(plot_err)?;

            if y_lo < 0.0 && y_hi > 0.0 {
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        vec![(x_lo, 0.0), (x_hi, 0.0)],
                        ZERO_LINE.stroke_width(1),
                    )))
                    .map_err(plot_err)?;
            }

            chart
                .draw_series(LineSeries::new(
                    time.iter().copied().zip(input.iter().copied()),
                    INPUT_COLOR.stroke_width(2),
                ))
                .map_err(plot_err)?;
            chart
                .draw_series(LineSeries::new(
                    time.iter().copied().zip(output.iter().copied()),
                    OUTPUT_COLOR.stroke_width(2),
                ))
                .map_err(plot_err)?;

            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(x_lo, y_lo), (x_hi, y_hi)],
                    FRAME.stroke_width(1),
                )))
                .map_err(plot_err)?;

            // legend box in the upper right corner: input swatch on top, output below
            let (dx, dy) = (x_hi - x_lo, y_hi - y_lo);
            let (l, r) = (x_hi - 0.14 * dx, x_hi - 0.03 * dx);
            let (b, t) = (y_hi - 0.17 * dy, y_hi - 0.03 * dy);
            let (sl, sr) = (l + 0.2 * (r - l), r - 0.2 * (r - l));
            let level = |f: f64| b + (t - b) * f;
            chart
                .draw_series([
                    Rectangle::new([(l, b), (r, t)], WHITE.filled()),
                    Rectangle::new([(l, b), (r, t)], FRAME.stroke_width(1)),
                ])
                .map_err(plot_err)?;
            chart
                .draw_series([
                    PathElement::new(vec![(sl, level(0.7)), (sr, level(0.7))], INPUT_COLOR.stroke_width(2)),
                    PathElement::new(vec![(sl, level(0.3)), (sr, level(0.3))], OUTPUT_COLOR.stroke_width(2)),
                ])
                .map_err(plot_err)?;

            root.present().map_err(plot_err)?;
        }

        save_png(&buf, output_path)
    }

    fn save_png(rgb: &[u8], output_path: &Path) -> Result<(), SimError> {
        let located = |e: &dyn std::fmt::Display| SimError::Plot(format!("{}: {}", output_path.display(), e));
        let file = File::create(output_path).map_err(|e| located(&e))?;
        let mut w = BufWriter::new(file);
        PngEncoder::new(&mut w)
            .write_image(rgb, WIDTH, HEIGHT, ExtendedColorType::Rgb8)
            .map_err(|e| located(&e))?;
        w.flush().map_err(|e| located(&e))
    }
}


#[cfg(all(test, not(feature = "plot")))]
mod no_backend_tests {
    use super::*;
    use crate::simulation::build_scenarios;

    #[test]
    fn test_plot_scenario_without_backend() {
        assert!(!plot_available());
        assert!(matches!(ensure_plot_backend(), Err(SimError::PlotUnavailable)));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario1.png");
        let err = plot_scenario(&build_scenarios().remove(0), &path).unwrap_err();
        assert!(matches!(err, SimError::PlotUnavailable));
        assert!(!path.exists());
    }
}

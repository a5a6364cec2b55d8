//! SVG ribbon chart comparing the two regimes across diversity order.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{HillError, Result};
use crate::statistics::{ColumnSummary, Summary};
use crate::types::Regime;

const CORRELATED_COLOR: RGBColor = RGBColor(0, 114, 178);
const UNCORRELATED_COLOR: RGBColor = RGBColor(213, 94, 0);

/// Render the summary as an SVG chart at `path`.
///
/// For each regime a shaded band spans the 2.5-97.5% range and a line joins
/// the medians. Non-finite values are left out.
pub fn plot_summary(summary: &Summary, path: impl AsRef<Path>, size: (u32, u32)) -> Result<()> {
    let path = path.as_ref();
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let (x_range, y_range) = axis_ranges(summary);

    let mut chart = ChartBuilder::on(&root)
        .caption("Joint Hill numbers", ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Diversity order q")
        .y_desc("Effective diversity")
        .draw()
        .map_err(plot_error)?;

    for (regime, color) in [
        (Regime::Correlated, CORRELATED_COLOR),
        (Regime::Uncorrelated, UNCORRELATED_COLOR),
    ] {
        let bands: Vec<&ColumnSummary> = summary
            .regime(regime)
            .filter(|c| c.lower.is_finite() && c.median.is_finite() && c.upper.is_finite())
            .collect();
        if bands.is_empty() {
            continue;
        }

        let ribbon: Vec<(f64, f64)> = bands
            .iter()
            .map(|c| (c.order, c.upper))
            .chain(bands.iter().rev().map(|c| (c.order, c.lower)))
            .collect();
        chart
            .draw_series(std::iter::once(Polygon::new(ribbon, color.mix(0.2))))
            .map_err(plot_error)?;

        chart
            .draw_series(LineSeries::new(
                bands.iter().map(|c| (c.order, c.median)),
                color.stroke_width(2),
            ))
            .map_err(plot_error)?
            .label(match regime {
                Regime::Correlated => "correlated",
                Regime::Uncorrelated => "uncorrelated",
            })
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

/// Axis ranges covering every finite band value, padded slightly.
fn axis_ranges(summary: &Summary) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let finite = || {
        summary
            .columns
            .iter()
            .filter(|c| c.lower.is_finite() && c.upper.is_finite())
    };

    let (x_min, x_max) = finite().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
        (lo.min(c.order), hi.max(c.order))
    });
    let (y_min, y_max) = finite().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
        (lo.min(c.lower), hi.max(c.upper))
    });

    (pad(x_min, x_max, 0.5), pad(y_min, y_max, 0.05 * (y_max - y_min).max(1e-6)))
}

fn pad(lo: f64, hi: f64, margin: f64) -> std::ops::Range<f64> {
    if !(lo.is_finite() && hi.is_finite()) {
        return 0.0..1.0;
    }
    if lo == hi {
        return (lo - 0.5)..(hi + 0.5);
    }
    (lo - margin)..(hi + margin)
}

fn plot_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> HillError {
    HillError::Plot(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ResultTable;
    use crate::trial::TrialResult;

    fn make_summary() -> Summary {
        let trials: Vec<TrialResult> = (0..10)
            .map(|i| {
                let x = i as f64 * 0.1;
                TrialResult {
                    correlated: vec![9.0 + x, 8.0 + x, 7.5 + x, 7.0 + x],
                    uncorrelated: vec![10.0 + x, 9.5 + x, 9.0 + x, 8.8 + x],
                }
            })
            .collect();
        Summary::from_table(&ResultTable::from_trials(&[1.0, 2.0, 3.0, 4.0], &trials))
    }

    #[test]
    fn test_plot_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hill.svg");
        plot_summary(&make_summary(), &path, (640, 480)).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("polygon") || svg.contains("path"));
    }

    #[test]
    fn test_axis_ranges_cover_bands() {
        let summary = make_summary();
        let (x, y) = axis_ranges(&summary);
        assert!(x.start < 1.0 && x.end > 4.0);
        assert!(y.start < 7.0 && y.end > 10.9);
    }

    #[test]
    fn test_pad_degenerate() {
        assert_eq!(pad(f64::INFINITY, f64::NEG_INFINITY, 0.1), 0.0..1.0);
        assert_eq!(pad(2.0, 2.0, 0.1), 1.5..2.5);
    }
}

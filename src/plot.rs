//! # Plot Builder
//!
//! Renders the per-timestamp **two-panel figure**: a 1-D altitude histogram
//! and a 2-D altitude/inclination density heatmap, composed side by side
//! into a single fixed-size SVG fragment.
//!
//! ## Overview
//! -----------------
//! The figure is drawn with the `plotters` SVG backend into an in-memory
//! string, so the output is directly embeddable in the assembled page (it is
//! a markup fragment, not a standalone document). Binning is done here;
//! only the drawing itself is delegated to the charting library.
//!
//! Layout: 1200×600 pixels, a title line `Plots as of DD/MM/YYYY, HH:MM:SS`,
//! histogram on the left, heatmap on the right.
//!
//! An empty sample set renders an empty chart frame over default `0..1` axis
//! ranges rather than failing.

use chrono::NaiveDateTime;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::orbital_state::SampleSet;
use crate::satplot_errors::SatplotError;

/// Total figure width in pixels.
pub const FIGURE_WIDTH: u32 = 1_200;

/// Total figure height in pixels.
pub const FIGURE_HEIGHT: u32 = 600;

/// Timestamp format used in the figure title line.
pub const TITLE_TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Number of altitude bins in the histogram panel.
const HISTOGRAM_BINS: usize = 30;

/// Heatmap grid resolution per axis.
const HEATMAP_BINS: usize = 40;

fn plot_err<E>(e: DrawingAreaErrorKind<E>) -> SatplotError
where
    E: std::error::Error + Send + Sync,
{
    SatplotError::PlotRendering(e.to_string())
}

/// Axis bounds for a value sequence.
///
/// Non-finite values are ignored; an empty or all-non-finite sequence yields
/// the default `0..1` range, and a degenerate single-value range is widened
/// so the chart coordinate system stays valid.
fn value_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if lo == hi {
        return (lo - 0.5, hi + 0.5);
    }
    (lo, hi)
}

/// Bin index of `value` on the `[lo, hi]` axis split into `bins` cells.
fn bin_index(value: f64, lo: f64, hi: f64, bins: usize) -> Option<usize> {
    if !value.is_finite() || value < lo || value > hi {
        return None;
    }
    let idx = ((value - lo) / (hi - lo) * bins as f64) as usize;
    Some(idx.min(bins - 1))
}

/// Build the two-panel figure for one timestamp.
///
/// Arguments
/// -----------------
/// * `samples`: the derived altitude/inclination pairs for this timestamp.
/// * `target`: the requested timestamp, rendered into the title line.
///
/// Return
/// ----------
/// * The figure as an embeddable SVG string, or
///   [`SatplotError::PlotRendering`] if the backend fails.
pub fn orbit_distribution_figure(
    samples: &SampleSet,
    target: &NaiveDateTime,
) -> Result<String, SatplotError> {
    let title = format!("Plots as of {}", target.format(TITLE_TIMESTAMP_FORMAT));
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (FIGURE_WIDTH, FIGURE_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;
        let titled = root.titled(&title, ("sans-serif", 24)).map_err(plot_err)?;
        let panels = titled.split_evenly((1, 2));
        draw_altitude_histogram(&panels[0], samples)?;
        draw_density_heatmap(&panels[1], samples)?;
        root.present().map_err(plot_err)?;
    }
    Ok(svg)
}

/// Draw the 1-D altitude histogram panel.
fn draw_altitude_histogram<DB>(
    area: &DrawingArea<DB, Shift>,
    samples: &SampleSet,
) -> Result<(), SatplotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (lo, hi) = value_bounds(samples.iter().map(|s| s.altitude_km));
    let bin_width = (hi - lo) / HISTOGRAM_BINS as f64;

    let mut counts = [0usize; HISTOGRAM_BINS];
    for sample in samples {
        if let Some(idx) = bin_index(sample.altitude_km, lo, hi, HISTOGRAM_BINS) {
            counts[idx] += 1;
        }
    }
    let y_max = counts.iter().copied().max().unwrap_or(0).max(1) as f64 * 1.05;

    let mut chart = ChartBuilder::on(area)
        .caption("Altitude Histogram", ("sans-serif", 18))
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 55)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(lo..hi, 0.0..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Altitude (km)")
        .y_desc("Count")
        .draw()
        .map_err(plot_err)?;

    let mut bars = Vec::with_capacity(HISTOGRAM_BINS);
    for (i, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let x0 = lo + i as f64 * bin_width;
        bars.push(Rectangle::new(
            [(x0, 0.0), (x0 + bin_width, count as f64)],
            BLUE.filled(),
        ));
    }
    chart.draw_series(bars).map_err(plot_err)?;

    Ok(())
}

/// Draw the 2-D altitude/inclination density heatmap panel.
fn draw_density_heatmap<DB>(
    area: &DrawingArea<DB, Shift>,
    samples: &SampleSet,
) -> Result<(), SatplotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (alt_lo, alt_hi) = value_bounds(samples.iter().map(|s| s.altitude_km));
    let (inc_lo, inc_hi) = value_bounds(samples.iter().map(|s| s.inclination_deg));
    let alt_step = (alt_hi - alt_lo) / HEATMAP_BINS as f64;
    let inc_step = (inc_hi - inc_lo) / HEATMAP_BINS as f64;

    let mut counts = vec![0usize; HEATMAP_BINS * HEATMAP_BINS];
    for sample in samples {
        let alt_idx = bin_index(sample.altitude_km, alt_lo, alt_hi, HEATMAP_BINS);
        let inc_idx = bin_index(sample.inclination_deg, inc_lo, inc_hi, HEATMAP_BINS);
        if let (Some(ai), Some(ii)) = (alt_idx, inc_idx) {
            counts[ai * HEATMAP_BINS + ii] += 1;
        }
    }
    let max_count = counts.iter().copied().max().unwrap_or(0).max(1) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption("Density Heatmap", ("sans-serif", 18))
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 55)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(alt_lo..alt_hi, inc_lo..inc_hi)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Altitude (km)")
        .y_desc("Inclination (deg)")
        .draw()
        .map_err(plot_err)?;

    let mut cells = Vec::with_capacity(HEATMAP_BINS * HEATMAP_BINS);
    for ai in 0..HEATMAP_BINS {
        for ii in 0..HEATMAP_BINS {
            let density = counts[ai * HEATMAP_BINS + ii] as f64 / max_count;
            let x0 = alt_lo + ai as f64 * alt_step;
            let y0 = inc_lo + ii as f64 * inc_step;
            cells.push(Rectangle::new(
                [(x0, y0), (x0 + alt_step, y0 + inc_step)],
                HSLColor(240.0 / 360.0 - 240.0 / 360.0 * density, 0.7, 0.5).filled(),
            ));
        }
    }
    chart.draw_series(cells).map_err(plot_err)?;

    Ok(())
}

#[cfg(test)]
mod plot_test {
    use super::*;
    use crate::orbital_state::OrbitalSample;
    use chrono::NaiveDate;

    fn target() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn sample(altitude_km: f64, inclination_deg: f64) -> OrbitalSample {
        OrbitalSample {
            altitude_km,
            inclination_deg,
        }
    }

    #[test]
    fn test_figure_carries_title_and_captions() {
        let samples = vec![sample(418.7, 51.6), sample(848.0, 99.2)];
        let svg = orbit_distribution_figure(&samples, &target()).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Plots as of 01/01/2024, 00:00:00"));
        assert!(svg.contains("Altitude Histogram"));
        assert!(svg.contains("Density Heatmap"));
    }

    #[test]
    fn test_empty_sample_set_still_renders_a_frame() {
        let svg = orbit_distribution_figure(&Vec::new(), &target()).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_value_bounds() {
        assert_eq!(value_bounds(std::iter::empty()), (0.0, 1.0));
        assert_eq!(value_bounds([3.0].into_iter()), (2.5, 3.5));
        assert_eq!(value_bounds([1.0, f64::NAN, 4.0].into_iter()), (1.0, 4.0));
    }

    #[test]
    fn test_bin_index_clamps_the_upper_edge() {
        assert_eq!(bin_index(0.0, 0.0, 10.0, 10), Some(0));
        assert_eq!(bin_index(10.0, 0.0, 10.0, 10), Some(9));
        assert_eq!(bin_index(f64::NAN, 0.0, 10.0, 10), None);
        assert_eq!(bin_index(-0.1, 0.0, 10.0, 10), None);
    }
}

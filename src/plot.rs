use plotters::prelude::*;

use crate::{series::PlotSeries, volume::Unit};

/// Render the series to an SVG file: blue crosses for the raw measurements,
/// a red averaged line with black error bars, one per condition
pub fn plot_series(
    series: &PlotSeries,
    unit: Unit,
    show_raw: bool,
    show_error: bool,
    filename: &str,
) {
    let max_value = |x: &[f64]| -> f64 { x.iter().cloned().fold(std::f64::NEG_INFINITY, f64::max) };
    let min_value = |x: &[f64]| -> f64 { x.iter().cloned().fold(std::f64::INFINITY, f64::min) };

    let plot = SVGBackend::new(filename, (768, 512)).into_drawing_area();
    plot.fill(&WHITE).unwrap();

    let lower: Vec<f64> = series
        .average_y
        .iter()
        .zip(&series.error_y)
        .map(|(y, e)| y - e)
        .collect();
    let upper: Vec<f64> = series
        .average_y
        .iter()
        .zip(&series.error_y)
        .map(|(y, e)| y + e)
        .collect();
    let y_min = min_value(&series.scatter_y).min(min_value(&lower));
    let y_max = max_value(&series.scatter_y).max(max_value(&upper));
    let x_min = min_value(&series.scatter_x);
    let x_max = max_value(&series.scatter_x);
    let xrange = x_max - x_min;
    let yrange = y_max - y_min;
    let mut chart = ChartBuilder::on(&plot)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .margin(10)
        .caption(
            format!(
                "Droplet {} as a Function of Droplet Phase Flow Rate at {} uL/min",
                unit.quantity(),
                series.carrier_flow_rate
            ),
            ("sans-serif", 16),
        )
        .build_cartesian_2d(
            x_min - xrange * 1e-2..x_max + xrange * 1e-2,
            y_min - yrange * 1e-2..y_max + yrange * 1e-2,
        )
        .unwrap();
    chart
        .configure_mesh()
        .x_desc("Droplet Phase Flow Rate (uL/min)")
        .y_desc(format!("Droplet {} ({})", unit.quantity(), unit))
        .draw()
        .unwrap();

    if show_raw {
        chart
            .draw_series(
                series
                    .scatter_points()
                    .map(|(x, y)| Cross::new((x, y), 4, &BLUE)),
            )
            .unwrap();
    }
    if show_error {
        chart
            .draw_series(
                series
                    .average_x
                    .iter()
                    .zip(&series.average_y)
                    .zip(&series.error_y)
                    .map(|((&x, &y), &e)| {
                        ErrorBar::new_vertical(x, y - e, y, y + e, BLACK.filled(), 6)
                    }),
            )
            .unwrap();
        chart
            .draw_series(LineSeries::new(
                series
                    .average_x
                    .iter()
                    .copied()
                    .zip(series.average_y.iter().copied()),
                &RED,
            ))
            .unwrap();
    }
}

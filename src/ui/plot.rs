use std::ops::RangeInclusive;

use chrono::{DateTime, NaiveDateTime};
use eframe::egui::epaint::TextShape;
use eframe::egui::{FontId, Pos2, Sense, Stroke, Ui, Vec2};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Line, MarkerShape, Plot,
    PlotPoint, PlotPoints, PlotTransform, Points,
};

use crate::color::{category_palette, ACCENT, OVERLAY};
use crate::view::chart::{
    CategoryBarChart, CategoryBoxPlot, HistogramChart, SeriesKind, TimeSeriesChart,
};

const PLOT_HEIGHT: f32 = 320.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

// ---------------------------------------------------------------------------
// Categorical charts
// ---------------------------------------------------------------------------

/// Box plot with one box per category at x = 0, 1, 2, …
pub fn box_plot(ui: &mut Ui, id: &str, chart: &CategoryBoxPlot) {
    let colors = category_palette(chart.groups.len());

    let response = Plot::new(id)
        .height(PLOT_HEIGHT)
        .show_axes([false, true])
        .y_axis_label(chart.value_axis.as_str())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, (group, color)) in chart.groups.iter().zip(&colors).enumerate() {
                let Some(stats) = &group.stats else {
                    continue;
                };
                let x = i as f64;
                let spread = BoxSpread::new(
                    stats.lower_whisker,
                    stats.q1,
                    stats.median,
                    stats.q3,
                    stats.upper_whisker,
                );
                let elem = BoxElem::new(x, spread)
                    .name(&group.category)
                    .box_width(0.6)
                    .whisker_width(0.3)
                    .fill(color.gamma_multiply(0.5))
                    .stroke(Stroke::new(1.5, *color));
                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(&group.category));

                if !stats.outliers.is_empty() {
                    let points: PlotPoints = stats.outliers.iter().map(|&v| [x, v]).collect();
                    plot_ui.points(
                        Points::new(points)
                            .shape(MarkerShape::Diamond)
                            .radius(3.0)
                            .color(*color),
                    );
                }
            }
        });

    let labels: Vec<&str> = chart.groups.iter().map(|g| g.category.as_str()).collect();
    category_labels(
        ui,
        &response.transform,
        &labels,
        chart.label_rotation_deg,
        &chart.category_axis,
    );
}

/// Bar per category with its interval drawn as a vertical whisker.
pub fn bar_chart(ui: &mut Ui, id: &str, chart: &CategoryBarChart) {
    let colors = category_palette(chart.bars.len());

    let response = Plot::new(id)
        .height(PLOT_HEIGHT)
        .show_axes([false, true])
        .y_axis_label(chart.value_axis.as_str())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = chart
                .bars
                .iter()
                .zip(&colors)
                .enumerate()
                .filter_map(|(i, (bar, color))| {
                    let value = bar.value?;
                    Some(
                        Bar::new(i as f64, value)
                            .name(&bar.category)
                            .width(0.6)
                            .fill(*color),
                    )
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).name(&chart.value_axis));

            for (i, bar) in chart.bars.iter().enumerate() {
                if let Some((lo, hi)) = bar.interval {
                    let x = i as f64;
                    plot_ui.line(Line::new(vec![[x, lo], [x, hi]]).color(OVERLAY).width(2.0));
                }
            }
        });

    let labels: Vec<&str> = chart.bars.iter().map(|b| b.category.as_str()).collect();
    category_labels(
        ui,
        &response.transform,
        &labels,
        chart.label_rotation_deg,
        &chart.category_axis,
    );
}

/// Paint category tick labels under a plot, rotated counter-clockwise so each
/// label ends at its tick, then the axis title.
///
/// egui_plot tick labels are always horizontal, so the plot hides its x axis
/// and the labels are painted into a band allocated below it.
fn category_labels(
    ui: &mut Ui,
    transform: &PlotTransform,
    labels: &[&str],
    rotation_deg: f32,
    axis: &str,
) {
    let angle = -rotation_deg.to_radians();
    let (sin, cos) = angle.sin_cos();
    let font = FontId::proportional(12.0);
    let color = ui.visuals().text_color();

    let galleys: Vec<_> = labels
        .iter()
        .map(|label| ui.painter().layout_no_wrap(label.to_string(), font.clone(), color))
        .collect();
    let band = galleys
        .iter()
        .map(|g| g.size().x * sin.abs() + g.size().y * cos.abs())
        .fold(0.0, f32::max)
        + 8.0;

    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), band), Sense::hover());
    let y_min = transform.bounds().min()[1];

    for (i, galley) in galleys.into_iter().enumerate() {
        let tick = transform.position_from_point(&PlotPoint::new(i as f64, y_min));
        let width = galley.size().x;
        let pos = Pos2::new(tick.x - width * cos, rect.top() + 4.0 - width * sin);
        ui.painter()
            .add(TextShape::new(pos, galley, color).with_angle(angle));
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(axis);
    });
}

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

/// Lines or bars against a date axis. Gaps in a line series are bridged.
pub fn time_series(ui: &mut Ui, id: &str, chart: &TimeSeriesChart) {
    let xs: Vec<f64> = chart.index.iter().map(date_to_days).collect();
    let colors = category_palette(chart.series.len().max(2));

    Plot::new(id)
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Date")
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| format_day(mark.value))
        .label_formatter(|name: &str, point: &PlotPoint| {
            let day = format_day(point.x);
            if name.is_empty() {
                format!("{day}\n{:.2}", point.y)
            } else {
                format!("{name}\n{day}\n{:.2}", point.y)
            }
        })
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            for (series, color) in chart.series.iter().zip(&colors) {
                let points = xs
                    .iter()
                    .zip(&series.values)
                    .filter_map(|(&x, v)| v.map(|v| [x, v]));

                match chart.kind {
                    SeriesKind::Line => {
                        let points: PlotPoints = points.collect();
                        plot_ui.line(Line::new(points).name(&series.name).color(*color).width(1.5));
                    }
                    SeriesKind::Bar => {
                        let bars: Vec<Bar> = points
                            .map(|[x, v]| Bar::new(x, v).width(0.8).fill(ACCENT))
                            .collect();
                        plot_ui.bar_chart(BarChart::new(bars).name(&series.name).color(ACCENT));
                    }
                }
            }
        });
}

fn date_to_days(date: &NaiveDateTime) -> f64 {
    date.and_utc().timestamp() as f64 / SECONDS_PER_DAY
}

fn format_day(days: f64) -> String {
    DateTime::from_timestamp((days * SECONDS_PER_DAY).round() as i64, 0)
        .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Distribution
// ---------------------------------------------------------------------------

/// Histogram bars with the density curve on top.
pub fn histogram(ui: &mut Ui, id: &str, chart: &HistogramChart) {
    Plot::new(id)
        .height(PLOT_HEIGHT)
        .x_axis_label(chart.value_axis.as_str())
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = chart
                .bins
                .iter()
                .map(|bin| {
                    Bar::new(bin.center(), bin.count as f64)
                        .width(bin.width())
                        .fill(ACCENT.gamma_multiply(0.6))
                        .stroke(Stroke::new(1.0, ACCENT))
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).name(&chart.value_axis));

            if !chart.density.is_empty() {
                plot_ui.line(Line::new(chart.density.clone()).color(OVERLAY).width(2.0));
            }
        });
}

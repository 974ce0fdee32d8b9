use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::color::generate_palette;
use crate::data::density::gaussian_kde;
use crate::data::smooth::lowess;
use crate::state::AppState;

/// Neighbourhood fraction for the scatter trendline.
const TRENDLINE_FRAC: f64 = 0.5;
/// Density bandwidth on the tip-percent scale.
const RIDGE_BANDWIDTH: f64 = 0.01;
/// Grid resolution of each density curve.
const RIDGE_GRID: usize = 200;
/// Vertical offset between ridge rows (curves are peak-normalised).
const RIDGE_SPACING: f64 = 1.2;

// ---------------------------------------------------------------------------
// Scatter plot: bill vs tip with LOWESS trendline
// ---------------------------------------------------------------------------

/// Render the bill vs. tip scatter over the filtered view.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    ui.strong("Total bill vs tip");

    let all_points: Vec<[f64; 2]> = state
        .visible_records()
        .map(|r| [r.total_bill, r.tip])
        .collect();

    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label("Total bill")
        .y_axis_label("Tip")
        .show(ui, |plot_ui| {
            match (state.scatter_color, &state.color_map) {
                (Some(cat), Some(cm)) => {
                    // One point group per level so the legend lists them.
                    for &level in cat.levels() {
                        let pts: Vec<[f64; 2]> = state
                            .visible_records()
                            .filter(|r| cat.value_of(r) == level)
                            .map(|r| [r.total_bill, r.tip])
                            .collect();
                        if pts.is_empty() {
                            continue;
                        }
                        plot_ui.points(
                            Points::new(PlotPoints::from(pts))
                                .radius(2.5)
                                .color(cm.color_for(level))
                                .name(level),
                        );
                    }
                }
                _ => {
                    if !all_points.is_empty() {
                        plot_ui.points(
                            Points::new(PlotPoints::from(all_points.clone()))
                                .radius(2.5)
                                .color(Color32::LIGHT_BLUE),
                        );
                    }
                }
            }

            let trend = lowess(&all_points, TRENDLINE_FRAC);
            if !trend.is_empty() {
                plot_ui.line(
                    Line::new(PlotPoints::from(trend))
                        .color(Color32::WHITE)
                        .width(2.0)
                        .name("trend"),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Ridgeline plot: tip percent densities per category level
// ---------------------------------------------------------------------------

/// Render tip-percent density curves, one offset row per level of the
/// split-by category.
pub fn ridge_plot(ui: &mut Ui, state: &AppState) {
    ui.strong("Tip percentages");

    let split = state.ridge_split;
    let levels = split.levels();
    let colors = generate_palette(levels.len());

    Plot::new("ridge_plot")
        .legend(Legend::default())
        .x_axis_label("Tip percent")
        .show_axes([true, false])
        .show(ui, |plot_ui| {
            for (i, (&level, color)) in levels.iter().zip(colors).enumerate() {
                let samples: Vec<f64> = state
                    .visible_records()
                    .filter(|r| split.value_of(r) == level)
                    .map(|r| r.tip_percent())
                    .collect();

                let curve = gaussian_kde(&samples, RIDGE_BANDWIDTH, RIDGE_GRID);
                if curve.is_empty() {
                    continue;
                }

                let peak = curve
                    .iter()
                    .map(|p| p[1])
                    .fold(f64::NEG_INFINITY, f64::max);
                let offset = i as f64 * RIDGE_SPACING;
                let pts: Vec<[f64; 2]> = curve
                    .iter()
                    .map(|p| [p[0], offset + p[1] / peak])
                    .collect();

                plot_ui.line(
                    Line::new(PlotPoints::from(pts))
                        .color(color)
                        .width(1.5)
                        .name(level),
                );
            }
        });
}

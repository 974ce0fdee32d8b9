use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::model::{Category, TimeOfDay};
use crate::data::stats::{format_currency, format_percent};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Bill amount range ----
            ui.strong("Bill amount");
            let (min, max) = state.dataset.bill_range;
            let (mut low, mut high) = state.filters.bill_range;
            let low_changed = ui
                .add(
                    egui::Slider::new(&mut low, min..=max)
                        .prefix("$")
                        .fixed_decimals(2)
                        .text("min"),
                )
                .changed();
            let high_changed = ui
                .add(
                    egui::Slider::new(&mut high, min..=max)
                        .prefix("$")
                        .fixed_decimals(2)
                        .text("max"),
                )
                .changed();
            if low_changed || high_changed {
                state.set_bill_range(low, high);
            }
            ui.add_space(8.0);

            // ---- Food service ----
            ui.strong("Food service");
            ui.horizontal(|ui: &mut Ui| {
                for time in TimeOfDay::ALL {
                    let mut checked = state.filters.times.contains(&time);
                    if ui.checkbox(&mut checked, time.as_str()).changed() {
                        state.toggle_time(time);
                    }
                }
            });
            ui.add_space(8.0);

            if ui.button("Reset filter").clicked() {
                state.reset_filters();
            }
            ui.separator();

            // ---- Scatter colour-by ----
            ui.strong("Color scatter by");
            if ui.radio(state.scatter_color.is_none(), "none").clicked() {
                state.set_scatter_color(None);
            }
            for cat in Category::ALL {
                if ui
                    .radio(state.scatter_color == Some(cat), cat.label())
                    .clicked()
                {
                    state.set_scatter_color(Some(cat));
                }
            }
            ui.separator();

            // ---- Ridgeline split-by ----
            ui.strong("Split tip rates by");
            for cat in Category::ALL {
                if ui.radio(state.ridge_split == cat, cat.label()).clicked() {
                    state.ridge_split = cat;
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar with record counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Restaurant tipping");
        ui.separator();
        ui.label(format!(
            "{} records loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Summary value boxes
// ---------------------------------------------------------------------------

/// Render the three summary value boxes over the filtered view.
pub fn summary_row(ui: &mut Ui, state: &AppState) {
    let summary = state.summary();
    ui.columns(3, |cols: &mut [Ui]| {
        value_box(&mut cols[0], "Total tippers", &summary.tippers.to_string());
        value_box(
            &mut cols[1],
            "Average tip",
            &format_percent(summary.avg_tip_percent),
        );
        value_box(
            &mut cols[2],
            "Average bill",
            &format_currency(summary.avg_bill),
        );
    });
}

fn value_box(ui: &mut Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(title);
            ui.heading(RichText::new(value).strong());
        });
        ui.allocate_space(ui.available_size());
    });
}

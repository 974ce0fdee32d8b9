use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data grid (filtered records)
// ---------------------------------------------------------------------------

/// Render the filtered records as a grid, in dataset order.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    ui.strong("Tips data");

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .column(Column::auto().at_least(70.0)) // Bill
        .column(Column::auto().at_least(60.0)) // Tip
        .column(Column::auto().at_least(60.0)) // Sex
        .column(Column::auto().at_least(60.0)) // Smoker
        .column(Column::auto().at_least(50.0)) // Day
        .column(Column::auto().at_least(60.0)) // Time
        .column(Column::remainder()) // Size
        .header(20.0, |mut header| {
            for title in ["Bill", "Tip", "Sex", "Smoker", "Day", "Time", "Size"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            let visible = &state.visible_indices;
            body.rows(18.0, visible.len(), |mut row| {
                let r = &state.dataset.records[visible[row.index()]];
                row.col(|ui| {
                    ui.label(format!("${:.2}", r.total_bill));
                });
                row.col(|ui| {
                    ui.label(format!("${:.2}", r.tip));
                });
                row.col(|ui| {
                    ui.label(r.sex.as_str());
                });
                row.col(|ui| {
                    ui.label(r.smoker.as_str());
                });
                row.col(|ui| {
                    ui.label(r.day.as_str());
                });
                row.col(|ui| {
                    ui.label(r.time.as_str());
                });
                row.col(|ui| {
                    ui.label(r.size.to_string());
                });
            });
        });
}

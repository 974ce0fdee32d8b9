use eframe::egui;
use egui_extras::{Size, StripBuilder};

use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TipBoardApp {
    pub state: AppState,
}

impl TipBoardApp {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for TipBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: record counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: value boxes, table, charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::exact(72.0))
                .size(Size::remainder())
                .size(Size::remainder())
                .vertical(|mut strip| {
                    strip.cell(|ui| panels::summary_row(ui, &self.state));
                    strip.strip(|builder| {
                        builder
                            .size(Size::relative(0.5))
                            .size(Size::remainder())
                            .horizontal(|mut strip| {
                                strip.cell(|ui| table::data_table(ui, &self.state));
                                strip.cell(|ui| plot::scatter_plot(ui, &self.state));
                            });
                    });
                    strip.cell(|ui| plot::ridge_plot(ui, &self.state));
                });
        });
    }
}

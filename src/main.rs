mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::anyhow;
use app::TipBoardApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = data::loader::load_embedded()?;
    log::info!(
        "Loaded {} tipping records, bills ${:.2} to ${:.2}",
        dataset.len(),
        dataset.bill_range.0,
        dataset.bill_range.1
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tipboard – Restaurant Tipping",
        options,
        Box::new(move |_cc| Ok(Box::new(TipBoardApp::new(dataset)))),
    )
    .map_err(|e| anyhow!("eframe: {e}"))
}

// main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 680.0])
            .with_min_inner_size([420.0, 560.0]),
        centered: true,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "LitFit Size Recommender",
        options,
        Box::new(|cc| Ok(Box::new(litfit::app::LitFitApp::new(cc)))),
    )
}

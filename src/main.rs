#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use header_toolbar::{ToolbarApp, ToolbarConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = match std::env::args().nth(1) {
        Some(path) => ToolbarConfig::load(&path).unwrap_or_else(|err| {
            log::error!("{err}; using default config");
            ToolbarConfig::default()
        }),
        None => ToolbarConfig::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Header Toolbar",
        native_options,
        Box::new(move |cc| Ok(Box::new(ToolbarApp::new(cc, config)))),
    )
}

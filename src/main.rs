//! Decorative particle-field backdrop
//!
//! Drives the per-frame simulation, paints it onto a CPU canvas shown
//! behind a scrollable content pane with parallax and reveal effects.

mod app;

use app::BackdropApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("starting backdrop");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("backdrop")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "backdrop",
        options,
        Box::new(|cc| Ok(Box::new(BackdropApp::new(cc)))),
    )
}

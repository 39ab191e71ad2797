//! Caliper application shell.
//!
//! Arranges the measuring canvases in one window: a rectangle board, a
//! circle board, and the picture ruler, each with its measurement panel.

mod app;
mod canvas_widget;

pub use app::CaliperApp;

/// Run the application with default settings.
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1480.0, 620.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Caliper",
        options,
        Box::new(|_cc| Ok(Box::new(CaliperApp::default()))),
    )
}

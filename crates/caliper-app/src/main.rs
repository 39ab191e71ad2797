//! Main application entry point.

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    log::info!("Starting Caliper");

    caliper_app::run_app()
}

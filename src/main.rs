//! m,n,k game GUI
//!
//! Play against the engine on a board of any size.

use mnk::ui::MnkApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,mnk=debug")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("m,n,k"),
        ..Default::default()
    };

    eframe::run_native("mnk", options, Box::new(|cc| Ok(Box::new(MnkApp::new(cc)))))
}

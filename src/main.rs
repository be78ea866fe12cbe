//! Pentaroll GUI
//!
//! A graphical interface for playing Pentaroll against the CPU or another
//! player.

use pentaroll::ui::PentarollApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([760.0, 580.0])
            .with_title("Pentaroll"),
        ..Default::default()
    };

    eframe::run_native(
        "Pentaroll",
        options,
        Box::new(|cc| Ok(Box::new(PentarollApp::new(cc)))),
    )
}

mod catalog;
mod metrics;
mod model;
mod schedule;
mod ui;

use eframe::egui;
use ui::RaspaApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 850.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "RobôRaspadinhas",
        options,
        Box::new(|cc| {
            ui::set_custom_style(&cc.egui_ctx);
            Ok(Box::new(RaspaApp::new()))
        }),
    )
}

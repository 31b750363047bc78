use std::path::Path;

use eframe::egui;
use yamazumi::app::YamazumiApp;
use yamazumi::config::{DEFAULT_SETTINGS_FILE, Settings};

fn main() -> eframe::Result {
    env_logger::init();

    let settings = match Settings::load_or_default(Path::new(DEFAULT_SETTINGS_FILE)) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("Ignoring {DEFAULT_SETTINGS_FILE}: {e}");
            Settings::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Yamazumi – Line Balancing Board",
        options,
        Box::new(|_cc| Ok(Box::new(YamazumiApp::new(settings)))),
    )
}

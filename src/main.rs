mod ui;
mod engine;
mod model;

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::ui::app::EcoApp;
use crate::ui::settings_io::load_settings;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecolearn=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = load_settings();
    tracing::info!(ui_scale = settings.ui_scale, "starting EcoLearn");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("EcoLearn")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "EcoLearn",
        options,
        Box::new(move |_cc| Ok(Box::new(EcoApp::new(settings)))),
    )
}

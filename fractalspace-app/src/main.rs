mod app;
mod app_dir;
mod canvas;
mod error;
mod input;
mod preferences;
mod ui;

use eframe::egui;
use tracing::{error, info};

use fractalspace_render::Controller;

use app::FractalSpaceApp;
use preferences::AppPreferences;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Fractal Space");

    let prefs = AppPreferences::load();
    let controller = match Controller::new(prefs.width, prefs.height) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Cannot start: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Fractal Space")
            .with_inner_size([prefs.width as f32, prefs.height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Fractal Space",
        options,
        Box::new(move |cc| Ok(Box::new(FractalSpaceApp::new(&cc.egui_ctx, controller, prefs)))),
    )
}

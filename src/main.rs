//! Entry point for the egui-based predictor window.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use ml_predictor::config;
use ml_predictor::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use ml_predictor::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = config::load_or_default();
    if let Err(err) = &settings {
        tracing::error!("Failed to load settings: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([560.0, 820.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "ML Predictor",
        native_options,
        Box::new(move |_cc| {
            let app: Box<dyn eframe::App> = match settings {
                Ok(settings) => Box::new(EguiApp::new(settings)),
                Err(err) => Box::new(LaunchError {
                    message: err.to_string(),
                }),
            };
            Ok(app)
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start ML Predictor");
                ui.label(&self.message);
            });
        });
    }
}

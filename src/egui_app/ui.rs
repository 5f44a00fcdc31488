//! egui renderer for the predictor window.

mod feature_form;
mod results;
pub mod style;

use std::time::Duration;

use crate::config::PredictorSettings;
use crate::egui_app::controller::EguiController;
use crate::egui_app::view_model;
use eframe::egui::{self, Frame, Margin, RichText, Stroke};

/// Smallest window size that keeps the form usable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(420.0, 520.0);
const FORM_MAX_WIDTH: f32 = 600.0;
const JOB_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app and start the one-shot startup requests.
    pub fn new(settings: PredictorSettings) -> Self {
        let mut controller = EguiController::new(settings);
        controller.start();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("header")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("ML Predictor").size(20.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let health = &self.controller.ui.service.health;
                        let (label, color) = view_model::health_badge(health);
                        let response = ui.label(RichText::new(label).color(color));
                        if let Some(detail) = view_model::health_detail(health) {
                            let _ = response.on_hover_text(detail);
                        }
                        ui.label(
                            RichText::new(&self.controller.ui.service.base_url)
                                .color(palette.text_muted)
                                .monospace(),
                        );
                    });
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(style::palette().bg_secondary))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(6.0, 10.0),
                        6.0,
                        status.badge_color,
                    );
                    ui.add_space(16.0);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    let log = status.log_text();
                    let response = ui.label(&status.text);
                    if !log.is_empty() {
                        let _ = response.on_hover_text(log);
                    }
                });
            });
    }

    /// Bordered block used for each form section.
    fn section_frame() -> Frame {
        Frame::new()
            .fill(style::palette().bg_secondary)
            .stroke(style::section_stroke())
            .inner_margin(Margin::same(16))
            .corner_radius(egui::CornerRadius::same(4))
    }

    fn callout_frame(fill: egui::Color32, stroke: egui::Color32) -> Frame {
        Frame::new()
            .fill(fill)
            .stroke(Stroke::new(1.0, stroke))
            .inner_margin(Margin::same(12))
            .corner_radius(egui::CornerRadius::same(4))
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.update();
        self.render_header(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.set_max_width(FORM_MAX_WIDTH);
                    self.render_feature_section(ui);
                    self.render_error(ui);
                    self.render_result_section(ui);
                    self.render_model_info(ui);
                });
        });
        if self.controller.jobs_in_flight() {
            ctx.request_repaint_after(JOB_POLL_INTERVAL);
        }
    }
}

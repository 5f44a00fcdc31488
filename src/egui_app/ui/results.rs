use super::EguiApp;
use super::style;
use crate::egui_app::view_model::ResultView;
use eframe::egui::{self, RichText};

const LABEL_SIZE: f32 = 12.0;

impl EguiApp {
    pub(super) fn render_error(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.controller.ui.form.state().error() else {
            return;
        };
        let palette = style::palette();
        Self::callout_frame(palette.error_bg, palette.error_fg).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("ERROR")
                    .size(LABEL_SIZE)
                    .strong()
                    .color(palette.text_muted),
            );
            ui.label(RichText::new(message).color(palette.error_fg));
        });
        ui.add_space(16.0);
    }

    pub(super) fn render_result_section(&mut self, ui: &mut egui::Ui) {
        let Some(result) = self.controller.ui.form.state().result() else {
            return;
        };
        let view = ResultView::from_result(result);
        let palette = style::palette();
        Self::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Prediction Result").strong().size(16.0));
            ui.add_space(10.0);

            Self::callout_frame(palette.bg_tertiary, palette.accent).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new("PREDICTED VALUE")
                        .size(LABEL_SIZE)
                        .strong()
                        .color(palette.text_muted),
                );
                ui.label(
                    RichText::new(&view.value_text)
                        .size(28.0)
                        .strong()
                        .color(palette.accent),
                );
            });
            ui.add_space(12.0);

            Self::callout_frame(palette.bg_tertiary, palette.accent).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new("MODEL CONFIDENCE")
                        .size(LABEL_SIZE)
                        .strong()
                        .color(palette.text_muted),
                );
                ui.label(
                    RichText::new(&view.confidence_text)
                        .size(18.0)
                        .strong()
                        .color(palette.accent),
                );
                ui.add_space(6.0);
                ui.add(
                    egui::ProgressBar::new(view.bar_fraction)
                        .fill(view.bar_color)
                        .desired_height(8.0),
                );
            });
            ui.add_space(12.0);

            ui.label(
                RichText::new(format!(
                    "Input Features: {}",
                    self.controller.ui.form.inputs().joined()
                ))
                .color(palette.text_muted),
            );
            if let Some(info) = self.controller.ui.form.model_info() {
                ui.label(
                    RichText::new(format!("Model Type: {}", info.model_type))
                        .color(palette.text_muted),
                );
            }
        });
        ui.add_space(16.0);
    }

    pub(super) fn render_model_info(&mut self, ui: &mut egui::Ui) {
        let Some(info) = self.controller.ui.form.model_info() else {
            return;
        };
        let palette = style::palette();
        Self::callout_frame(palette.bg_secondary, palette.bg_tertiary).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Model Information").strong());
            ui.label(format!("Model: {}", info.model_type));
            ui.label(format!("Features: {}", info.feature_count));
            ui.label(format!("Version: {}", info.version));
            if let Some(trees) = info.n_estimators {
                ui.label(RichText::new(format!("Estimators: {trees}")).color(palette.text_muted));
            }
        });
    }
}

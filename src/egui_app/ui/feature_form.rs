use super::EguiApp;
use super::style;
use crate::prediction::FEATURE_COUNT;
use eframe::egui::{self, RichText};

const BUTTON_HEIGHT: f32 = 32.0;

impl EguiApp {
    /// Feature text fields plus the Randomize / Clear / Get Prediction actions.
    pub(super) fn render_feature_section(&mut self, ui: &mut egui::Ui) {
        Self::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Input Features").strong().size(16.0));
            ui.add_space(10.0);
            for index in 0..FEATURE_COUNT {
                self.render_feature_field(ui, index);
                ui.add_space(8.0);
            }
            ui.add_space(8.0);
            self.render_form_actions(ui);
        });
        ui.add_space(16.0);
    }

    fn render_feature_field(&mut self, ui: &mut egui::Ui, index: usize) {
        let label = format!("Feature {}", index + 1);
        ui.label(RichText::new(&label).color(style::palette().text_primary));
        let mut text = self
            .controller
            .ui
            .form
            .inputs()
            .get(index)
            .unwrap_or_default()
            .to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .id_salt(("feature_input", index))
                .hint_text(format!("Enter feature {}", index + 1))
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.controller.set_feature(index, text);
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.controller.request_prediction();
        }
    }

    fn render_form_actions(&mut self, ui: &mut egui::Ui) {
        let loading = self.controller.predict_in_flight();
        ui.columns(2, |columns| {
            let size = egui::vec2(columns[0].available_width(), BUTTON_HEIGHT);
            if columns[0]
                .add_sized(size, egui::Button::new("Randomize"))
                .clicked()
            {
                self.controller.randomize_features();
            }
            if columns[1]
                .add_sized(size, egui::Button::new("Clear"))
                .clicked()
            {
                self.controller.clear_features();
            }
        });
        ui.add_space(10.0);
        let label = if loading {
            "Predicting..."
        } else {
            "Get Prediction"
        };
        ui.horizontal(|ui| {
            let button = egui::Button::new(RichText::new(label).strong())
                .fill(style::palette().accent)
                .min_size(egui::vec2(ui.available_width() - 28.0, BUTTON_HEIGHT));
            if ui.add_enabled(!loading, button).clicked() {
                self.controller.request_prediction();
            }
            if loading {
                ui.spinner();
            }
        });
    }
}

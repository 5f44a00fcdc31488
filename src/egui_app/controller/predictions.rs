use super::*;

use crate::form::display;
use crate::prediction::{HealthStatus, ModelInfo, PredictError, PredictionResult};

impl EguiController {
    /// Store raw text typed into feature field `index`.
    pub fn set_feature(&mut self, index: usize, raw_text: impl Into<String>) {
        self.ui.form.set_feature(index, raw_text);
    }

    /// Fill the form with random feature values.
    pub fn randomize_features(&mut self) {
        self.ui.form.randomize();
        self.set_status("Randomized feature values", StatusTone::Info);
    }

    /// Reset the form to zeroes with no result.
    pub fn clear_features(&mut self) {
        self.ui.form.clear();
        self.set_status("Cleared feature values", StatusTone::Idle);
    }

    /// Whether the submit action should be disabled.
    pub fn predict_in_flight(&self) -> bool {
        self.jobs.predict_in_progress() || self.ui.form.state().is_loading()
    }

    /// Validate the form and, if valid, send it to the service in the background.
    pub fn request_prediction(&mut self) {
        if self.predict_in_flight() {
            return;
        }
        let Some(features) = self.ui.form.begin_predict() else {
            if let Some(message) = self.ui.form.state().error().map(str::to_string) {
                self.set_status(message, StatusTone::Warning);
            }
            return;
        };
        tracing::info!(?features, "Requesting prediction");
        self.jobs.begin_predict(self.service.clone(), features);
        self.set_status("Predicting...", StatusTone::Busy);
    }

    pub(in crate::egui_app::controller) fn apply_prediction_result(
        &mut self,
        result: Result<PredictionResult, PredictError>,
    ) {
        match &result {
            Ok(prediction) => self.set_status(
                format!(
                    "Predicted {} ({} confidence)",
                    display::format_prediction(prediction.predicted_value),
                    display::format_confidence(prediction.confidence)
                ),
                StatusTone::Info,
            ),
            Err(err) => self.set_status(format!("Prediction failed: {err}"), StatusTone::Error),
        }
        self.ui.form.finish_predict(result);
    }

    pub(in crate::egui_app::controller) fn apply_model_info(&mut self, info: Option<ModelInfo>) {
        if let Some(info) = &info {
            self.set_status(
                format!("Model {} v{} ready", info.model_type, info.version),
                StatusTone::Info,
            );
        }
        self.ui.form.set_model_info(info);
    }

    pub(in crate::egui_app::controller) fn apply_health_check(
        &mut self,
        result: Result<HealthStatus, PredictError>,
    ) {
        self.ui.service.health = match result {
            Ok(health) if health.is_ready() => ServiceHealth::Ready,
            Ok(health) => {
                let detail = if health.model_loaded {
                    format!("status: {}", health.status)
                } else {
                    "model not loaded".to_string()
                };
                tracing::warn!("Prediction service degraded: {detail}");
                self.set_status(format!("Service degraded: {detail}"), StatusTone::Warning);
                ServiceHealth::Degraded(detail)
            }
            Err(err) => {
                tracing::warn!("Health check failed: {err}");
                self.set_status(
                    format!("Service unreachable at {}", self.settings.base_url),
                    StatusTone::Warning,
                );
                ServiceHealth::Unreachable(err.to_string())
            }
        };
    }
}

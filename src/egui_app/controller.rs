//! Bridges the prediction form and client to the egui renderer.

use crate::config::PredictorSettings;
use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::prediction::{PredictionClient, PredictionService};
use std::sync::Arc;

mod background_jobs;
mod jobs;
mod predictions;
#[cfg(test)]
mod tests;

/// Prediction backend shared with job threads.
pub(crate) type SharedService = Arc<dyn PredictionService + Send + Sync>;

/// Maintains app state and runs service calls off the UI thread.
pub struct EguiController {
    pub ui: UiState,
    settings: PredictorSettings,
    service: SharedService,
    jobs: jobs::ControllerJobs,
}

impl EguiController {
    /// Create a controller talking to the service configured in `settings`.
    pub fn new(settings: PredictorSettings) -> Self {
        let client = PredictionClient::from_settings(&settings);
        Self::with_service(settings, Arc::new(client))
    }

    pub(crate) fn with_service(settings: PredictorSettings, service: SharedService) -> Self {
        let mut ui = UiState::default();
        ui.service.base_url = settings.base_url.clone();
        Self {
            ui,
            settings,
            service,
            jobs: jobs::ControllerJobs::new(),
        }
    }

    /// Kick off the one-shot startup requests (model info and health).
    pub fn start(&mut self) {
        if !self.settings.fetch_info_on_startup {
            return;
        }
        self.jobs.begin_model_info_fetch(self.service.clone());
        self.ui.service.health = ServiceHealth::Checking;
        self.jobs.begin_health_check(self.service.clone());
        self.set_status(
            format!("Connecting to {}", self.settings.base_url),
            StatusTone::Busy,
        );
    }

    /// Apply finished job results; call once per frame.
    pub fn update(&mut self) {
        self.poll_background_jobs();
    }

    /// True while any background request is outstanding.
    pub fn jobs_in_flight(&self) -> bool {
        self.jobs.any_in_progress()
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }
}

//! Form state for the five feature inputs and the prediction lifecycle.
//!
//! The form is UI-agnostic: the egui controller drives it from job results,
//! the CLI and tests drive it synchronously through [`PredictorForm::predict_with`].

pub mod display;
mod inputs;
mod state;

pub use inputs::{FeatureInputs, INVALID_FEATURES_MESSAGE, ValidationError};
pub use state::PredictionState;

use crate::prediction::{FeatureVector, ModelInfo, PredictError, PredictionResult, PredictionService};

/// Feature inputs plus the current prediction state and model metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictorForm {
    inputs: FeatureInputs,
    state: PredictionState,
    model_info: Option<ModelInfo>,
}

impl PredictorForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &FeatureInputs {
        &self.inputs
    }

    pub fn state(&self) -> &PredictionState {
        &self.state
    }

    pub fn model_info(&self) -> Option<&ModelInfo> {
        self.model_info.as_ref()
    }

    /// Record the result of the one-shot metadata fetch.
    pub fn set_model_info(&mut self, info: Option<ModelInfo>) {
        self.model_info = info;
    }

    /// Store raw text for one feature and dismiss any error.
    ///
    /// The text is not validated until [`Self::begin_predict`].
    pub fn set_feature(&mut self, index: usize, raw_text: impl Into<String>) {
        if !self.inputs.set(index, raw_text) {
            tracing::warn!(index, "Ignoring edit for out-of-range feature");
            return;
        }
        if matches!(self.state, PredictionState::Error(_)) {
            self.state = PredictionState::Idle;
        }
    }

    /// Replace every feature with a random value and drop any result or error.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// [`Self::randomize`] with a caller-supplied generator.
    pub fn randomize_with<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.inputs.randomize_with(rng);
        if !self.state.is_loading() {
            self.state = PredictionState::Idle;
        }
    }

    /// Reset features to `"0"` and drop any result or error.
    pub fn clear(&mut self) {
        self.inputs.reset();
        if !self.state.is_loading() {
            self.state = PredictionState::Idle;
        }
    }

    /// Enter `Loading` and return the parsed features to send.
    ///
    /// Returns `None` without touching the network when a request is already
    /// in flight, or when validation fails (the state then holds the
    /// validation message).
    pub fn begin_predict(&mut self) -> Option<FeatureVector> {
        if self.state.is_loading() {
            tracing::debug!("Prediction already in flight");
            return None;
        }
        self.state = PredictionState::Loading;
        match self.inputs.parse() {
            Ok(features) => Some(features),
            Err(err) => {
                tracing::info!(index = err.index, "Rejected non-numeric feature input");
                self.state = PredictionState::Error(err.to_string());
                None
            }
        }
    }

    /// Leave `Loading` with the service outcome.
    pub fn finish_predict(&mut self, outcome: Result<PredictionResult, PredictError>) {
        self.state = match outcome {
            Ok(result) => PredictionState::Success(result),
            Err(err) => {
                tracing::error!("Prediction error: {err}");
                PredictionState::Error(err.to_string())
            }
        };
    }

    /// Run a full prediction synchronously against `service`.
    pub fn predict_with<S: PredictionService + ?Sized>(&mut self, service: &S) -> &PredictionState {
        if let Some(features) = self.begin_predict() {
            let outcome = service.predict(&features);
            self.finish_predict(outcome);
        }
        &self.state
    }
}

//! Shared state types for the egui UI.

mod service;
mod status;

pub use service::*;
pub use status::*;

use crate::form::PredictorForm;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub status: StatusBarState,
    /// Feature inputs, prediction lifecycle and model metadata.
    pub form: PredictorForm,
    pub service: ServiceUiState,
}

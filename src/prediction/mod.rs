//! Client for the remote model-serving API.

pub mod api;
mod types;

pub use api::{PredictionClient, TRANSPORT_FALLBACK_MESSAGE};
pub use types::{
    BatchPrediction, FEATURE_COUNT, FeatureVector, HealthStatus, ModelInfo, PredictError,
    PredictionResult,
};

/// Operations the form controller needs from a prediction backend.
pub trait PredictionService {
    /// Request a prediction for one feature vector.
    fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, PredictError>;

    /// Best-effort metadata lookup; `None` when unavailable.
    fn fetch_model_info(&self) -> Option<ModelInfo>;

    /// Query service liveness.
    fn check_health(&self) -> Result<HealthStatus, PredictError>;
}

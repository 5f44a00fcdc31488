use serde::{Deserialize, Serialize};

/// Number of feature values the model expects.
pub const FEATURE_COUNT: usize = 5;

/// Parsed feature values in input order.
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Prediction returned by `POST /predict`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PredictionResult {
    pub predicted_value: f64,
    /// Server-reported certainty, nominally in `[0, 1]`.
    pub confidence: f64,
}

/// Static metadata about the serving model, from `GET /info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_type: String,
    pub feature_count: u32,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_estimators: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feature_names: Vec<String>,
}

/// Service liveness from `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthStatus {
    /// True when the service reports itself healthy with a model ready to serve.
    pub fn is_ready(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") && self.model_loaded
    }
}

/// One record of a `POST /batch_predict` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BatchPrediction {
    pub input_features: Vec<f64>,
    pub prediction: f64,
}

/// Failures of the prediction endpoints.
///
/// `Display` renders the message shown to the user.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PredictError {
    /// No usable HTTP response (connection refused, timeout, DNS, ...).
    #[error("{0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("{message}")]
    Service { status: u16, message: String },
    /// A success response whose body could not be understood.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Serialize)]
pub(super) struct PredictRequestWire<'a> {
    pub features: &'a [f64],
    pub context: &'a str,
}

#[derive(Deserialize)]
pub(super) struct PredictResponseWire {
    pub prediction: f64,
    pub confidence: f64,
}

impl From<PredictResponseWire> for PredictionResult {
    fn from(wire: PredictResponseWire) -> Self {
        Self {
            predicted_value: wire.prediction,
            confidence: wire.confidence,
        }
    }
}

#[derive(Serialize)]
pub(super) struct BatchRequestWire<'a> {
    pub records: Vec<BatchRecordWire<'a>>,
}

#[derive(Serialize)]
pub(super) struct BatchRecordWire<'a> {
    pub features: &'a [f64],
}

#[derive(Deserialize)]
pub(super) struct BatchResponseWire {
    pub predictions: Vec<BatchPrediction>,
    #[serde(default)]
    pub record_count: Option<usize>,
}

#[derive(Deserialize)]
pub(super) struct ErrorBodyWire {
    #[serde(default)]
    pub error: Option<String>,
}

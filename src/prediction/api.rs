//! Blocking client for the model-serving HTTP API.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    BatchPrediction, BatchRecordWire, BatchRequestWire, BatchResponseWire, ErrorBodyWire,
    FeatureVector, HealthStatus, ModelInfo, PredictError, PredictRequestWire, PredictResponseWire,
    PredictionResult,
};
use super::PredictionService;
use crate::config::{DEFAULT_CONTEXT, PredictorSettings};
use crate::http_client::{self, HttpTimeouts};

/// Message used when a transport failure carries no detail of its own.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Failed to get prediction. Ensure backend is running.";

const MAX_INFO_RESPONSE_BYTES: usize = 64 * 1024;
const MAX_PREDICT_RESPONSE_BYTES: usize = 256 * 1024;
const MAX_BATCH_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// Thin wrapper over `ureq` bound to one service base URL.
#[derive(Clone, Debug)]
pub struct PredictionClient {
    agent: ureq::Agent,
    base_url: String,
    context: String,
}

impl PredictionClient {
    /// Build a client from loaded settings.
    pub fn from_settings(settings: &PredictorSettings) -> Self {
        Self::new(
            &settings.base_url,
            &settings.context,
            settings.timeouts.to_http_timeouts(),
        )
    }

    /// Build a client for `base_url`; trailing slashes are ignored.
    pub fn new(base_url: &str, context: &str, timeouts: HttpTimeouts) -> Self {
        Self {
            agent: http_client::build_agent(timeouts),
            base_url: base_url.trim_end_matches('/').to_string(),
            context: context.to_string(),
        }
    }

    /// Build a client with default timeouts and context.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(base_url, DEFAULT_CONTEXT, HttpTimeouts::default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch model metadata, or `None` when the service cannot provide it.
    ///
    /// Failures are logged and never retried.
    pub fn fetch_model_info(&self) -> Option<ModelInfo> {
        match self.get_json::<ModelInfo>("/info", MAX_INFO_RESPONSE_BYTES) {
            Ok(info) => {
                tracing::info!(
                    model_type = %info.model_type,
                    version = %info.version,
                    "Fetched model info"
                );
                Some(info)
            }
            Err(err) => {
                tracing::warn!("Could not fetch model info: {err}");
                None
            }
        }
    }

    /// Query the service health endpoint.
    pub fn check_health(&self) -> Result<HealthStatus, PredictError> {
        self.get_json("/health", MAX_INFO_RESPONSE_BYTES)
    }

    /// Request a single prediction for `features`.
    pub fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, PredictError> {
        let request = PredictRequestWire {
            features,
            context: &self.context,
        };
        let wire: PredictResponseWire =
            self.post_json("/predict", &request, MAX_PREDICT_RESPONSE_BYTES)?;
        let result = PredictionResult::from(wire);
        tracing::info!(
            prediction = result.predicted_value,
            confidence = result.confidence,
            "Prediction received"
        );
        Ok(result)
    }

    /// Request predictions for several feature vectors in one call.
    pub fn predict_batch(
        &self,
        records: &[FeatureVector],
    ) -> Result<Vec<BatchPrediction>, PredictError> {
        let request = BatchRequestWire {
            records: records
                .iter()
                .map(|features| BatchRecordWire { features })
                .collect(),
        };
        let wire: BatchResponseWire =
            self.post_json("/batch_predict", &request, MAX_BATCH_RESPONSE_BYTES)?;
        if let Some(count) = wire.record_count
            && count != wire.predictions.len()
        {
            tracing::warn!(
                reported = count,
                received = wire.predictions.len(),
                "Batch record_count does not match predictions"
            );
        }
        Ok(wire.predictions)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, max_bytes: usize) -> Result<T, PredictError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call();
        decode_response(response, max_bytes)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        max_bytes: usize,
    ) -> Result<T, PredictError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self
            .agent
            .post(&url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json")
            .send_json(body);
        decode_response(response, max_bytes)
    }
}

impl PredictionService for PredictionClient {
    fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, PredictError> {
        PredictionClient::predict(self, features)
    }

    fn fetch_model_info(&self) -> Option<ModelInfo> {
        PredictionClient::fetch_model_info(self)
    }

    fn check_health(&self) -> Result<HealthStatus, PredictError> {
        PredictionClient::check_health(self)
    }
}

fn decode_response<T: DeserializeOwned>(
    response: Result<ureq::Response, ureq::Error>,
    max_bytes: usize,
) -> Result<T, PredictError> {
    let response = match response {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = http_client::read_response_text(response, max_bytes).unwrap_or_default();
            return Err(status_error(code, &body));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(transport_message(err.to_string())));
        }
    };
    let body = http_client::read_response_text(response, max_bytes)
        .map_err(|err| PredictError::InvalidResponse(err.to_string()))?;
    serde_json::from_str(body.trim())
        .map_err(|err| PredictError::InvalidResponse(format!("{err}: {}", body.trim())))
}

/// Prefer the server's `error` field, falling back to the status code.
fn status_error(status: u16, body: &str) -> PredictError {
    let message = serde_json::from_str::<ErrorBodyWire>(body.trim())
        .ok()
        .and_then(|wire| wire.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"));
    PredictError::Service { status, message }
}

fn transport_message(detail: String) -> String {
    if detail.trim().is_empty() {
        TRANSPORT_FALLBACK_MESSAGE.to_string()
    } else {
        detail
    }
}

use crate::prediction::PredictionResult;

/// Outcome of the most recent prediction request.
///
/// Exactly one variant is active; transitions replace the whole value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PredictionState {
    /// Nothing to show.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Success(PredictionResult),
    /// The last request failed validation or the service call.
    Error(String),
}

impl PredictionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

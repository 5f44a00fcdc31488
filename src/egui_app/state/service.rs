/// Liveness of the prediction service as last observed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ServiceHealth {
    /// No health check has run.
    #[default]
    Unknown,
    /// Health check in progress.
    Checking,
    /// Service is up with a model loaded.
    Ready,
    /// Service answered but reports a problem.
    Degraded(String),
    /// Health endpoint could not be reached.
    Unreachable(String),
}

/// Connection details shown in the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceUiState {
    /// Base URL requests are sent to.
    pub base_url: String,
    pub health: ServiceHealth,
}

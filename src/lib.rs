//! Desktop client for a remote five-feature prediction service.
/// Application directory resolution.
pub mod app_dirs;
/// Persisted settings and the base URL override.
pub mod config;
/// egui front end.
pub mod egui_app;
/// Feature inputs and the prediction lifecycle.
pub mod form;
/// HTTP agent helpers.
pub mod http_client;
/// Tracing setup.
pub mod logging;
/// Client for the model-serving API.
pub mod prediction;

use super::*;
use crate::form::{INVALID_FEATURES_MESSAGE, PredictionState};
use crate::prediction::{FeatureVector, HealthStatus, ModelInfo, PredictError, PredictionResult};
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct StubService {
    predict: Result<PredictionResult, PredictError>,
    info: Option<ModelInfo>,
    calls: Mutex<Vec<FeatureVector>>,
}

impl StubService {
    fn new(predict: Result<PredictionResult, PredictError>, info: Option<ModelInfo>) -> Arc<Self> {
        Arc::new(Self {
            predict,
            info,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<FeatureVector> {
        self.calls.lock().unwrap().clone()
    }
}

impl PredictionService for StubService {
    fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, PredictError> {
        self.calls.lock().unwrap().push(*features);
        self.predict.clone()
    }

    fn fetch_model_info(&self) -> Option<ModelInfo> {
        self.info.clone()
    }

    fn check_health(&self) -> Result<HealthStatus, PredictError> {
        Ok(HealthStatus {
            status: "healthy".into(),
            model_loaded: true,
        })
    }
}

fn sample_info() -> ModelInfo {
    ModelInfo {
        model_type: "RandomForestRegressor".into(),
        feature_count: 5,
        version: "1.0.0".into(),
        n_estimators: Some(50),
        feature_names: Vec::new(),
    }
}

fn controller_with(service: Arc<StubService>) -> EguiController {
    EguiController::with_service(PredictorSettings::default(), service)
}

fn pump(controller: &mut EguiController) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        controller.update();
        if !controller.jobs_in_flight() {
            return;
        }
        assert!(Instant::now() < deadline, "background jobs did not finish");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn startup_loads_model_info_and_health() {
    let service = StubService::new(Err(PredictError::Transport("unused".into())), Some(sample_info()));
    let mut controller = controller_with(service);
    controller.start();
    assert_eq!(controller.ui.service.health, ServiceHealth::Checking);
    pump(&mut controller);
    assert_eq!(controller.ui.form.model_info(), Some(&sample_info()));
    assert_eq!(controller.ui.service.health, ServiceHealth::Ready);
}

#[test]
fn missing_model_info_leaves_prediction_working() {
    let service = StubService::new(
        Ok(PredictionResult {
            predicted_value: 42.5,
            confidence: 0.83,
        }),
        None,
    );
    let mut controller = controller_with(service.clone());
    controller.start();
    pump(&mut controller);
    assert!(controller.ui.form.model_info().is_none());

    for (index, value) in ["1", "2", "3", "4", "5"].into_iter().enumerate() {
        controller.set_feature(index, value);
    }
    controller.request_prediction();
    assert!(controller.predict_in_flight());
    pump(&mut controller);

    assert_eq!(service.calls(), vec![[1.0, 2.0, 3.0, 4.0, 5.0]]);
    let result = controller.ui.form.state().result().copied().unwrap();
    assert_eq!(result.predicted_value, 42.5);
    assert!(!controller.predict_in_flight());
}

#[test]
fn invalid_features_do_not_spawn_a_request() {
    let service = StubService::new(
        Ok(PredictionResult {
            predicted_value: 1.0,
            confidence: 1.0,
        }),
        None,
    );
    let mut controller = controller_with(service.clone());
    controller.set_feature(3, "1.2.3");
    controller.request_prediction();
    assert!(!controller.jobs_in_flight());
    assert_eq!(
        *controller.ui.form.state(),
        PredictionState::Error(INVALID_FEATURES_MESSAGE.into())
    );
    assert!(service.calls().is_empty());
}

#[test]
fn service_error_is_shown_and_loading_cleared() {
    let service = StubService::new(
        Err(PredictError::Service {
            status: 500,
            message: "model unavailable".into(),
        }),
        None,
    );
    let mut controller = controller_with(service);
    controller.request_prediction();
    pump(&mut controller);
    assert_eq!(controller.ui.form.state().error(), Some("model unavailable"));
    assert!(!controller.predict_in_flight());
    assert_eq!(controller.ui.status.badge_label, "Error");
}

#[test]
fn second_submit_while_loading_is_ignored() {
    let service = StubService::new(
        Ok(PredictionResult {
            predicted_value: 1.0,
            confidence: 0.5,
        }),
        None,
    );
    let mut controller = controller_with(service.clone());
    controller.request_prediction();
    controller.request_prediction();
    pump(&mut controller);
    assert_eq!(service.calls().len(), 1);
}

#[test]
fn clear_and_randomize_reset_outcome() {
    let service = StubService::new(
        Ok(PredictionResult {
            predicted_value: 1.0,
            confidence: 0.5,
        }),
        None,
    );
    let mut controller = controller_with(service);
    controller.request_prediction();
    pump(&mut controller);
    controller.randomize_features();
    assert_eq!(*controller.ui.form.state(), PredictionState::Idle);
    controller.clear_features();
    assert_eq!(
        controller.ui.form.inputs().iter().collect::<Vec<_>>(),
        vec!["0"; 5]
    );
}

#[test]
fn startup_requests_are_skipped_when_disabled() {
    let service = StubService::new(Err(PredictError::Transport("unused".into())), Some(sample_info()));
    let settings = PredictorSettings {
        fetch_info_on_startup: false,
        ..PredictorSettings::default()
    };
    let mut controller = EguiController::with_service(settings, service);
    controller.start();
    assert!(!controller.jobs_in_flight());
    assert_eq!(controller.ui.service.health, ServiceHealth::Unknown);
}

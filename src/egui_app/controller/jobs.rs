use super::SharedService;
use crate::prediction::{FeatureVector, HealthStatus, ModelInfo, PredictError, PredictionResult};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    Predicted(PredictJobResult),
    ModelInfoFetched(Option<ModelInfo>),
    HealthChecked(Result<HealthStatus, PredictError>),
}

#[derive(Debug)]
pub(crate) struct PredictJobResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<PredictionResult, PredictError>,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_predict_id: u64,
    pending_predict: Option<u64>,
    model_info_in_progress: bool,
    health_check_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            next_predict_id: 1,
            pending_predict: None,
            model_info_in_progress: false,
            health_check_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn any_in_progress(&self) -> bool {
        self.pending_predict.is_some() || self.model_info_in_progress || self.health_check_in_progress
    }

    pub(super) fn predict_in_progress(&self) -> bool {
        self.pending_predict.is_some()
    }

    pub(super) fn begin_predict(&mut self, service: SharedService, features: FeatureVector) {
        if self.pending_predict.is_some() {
            return;
        }
        let request_id = self.next_predict_id;
        self.next_predict_id = self.next_predict_id.wrapping_add(1).max(1);
        self.pending_predict = Some(request_id);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = service.predict(&features);
            let _ = tx.send(JobMessage::Predicted(PredictJobResult { request_id, result }));
        });
    }

    /// Clear the pending marker if `request_id` is the outstanding call.
    pub(super) fn finish_predict(&mut self, request_id: u64) -> bool {
        if self.pending_predict == Some(request_id) {
            self.pending_predict = None;
            true
        } else {
            false
        }
    }

    pub(super) fn begin_model_info_fetch(&mut self, service: SharedService) {
        if self.model_info_in_progress {
            return;
        }
        self.model_info_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let info = service.fetch_model_info();
            let _ = tx.send(JobMessage::ModelInfoFetched(info));
        });
    }

    pub(super) fn clear_model_info_fetch(&mut self) {
        self.model_info_in_progress = false;
    }

    pub(super) fn begin_health_check(&mut self, service: SharedService) {
        if self.health_check_in_progress {
            return;
        }
        self.health_check_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = service.check_health();
            let _ = tx.send(JobMessage::HealthChecked(result));
        });
    }

    pub(super) fn clear_health_check(&mut self) {
        self.health_check_in_progress = false;
    }
}

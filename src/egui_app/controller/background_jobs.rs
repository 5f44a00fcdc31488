use super::jobs::JobMessage;
use super::*;

impl EguiController {
    pub(in crate::egui_app::controller) fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::Predicted(message) => {
                    if !self.jobs.finish_predict(message.request_id) {
                        tracing::debug!(
                            request_id = message.request_id,
                            "Dropping stale prediction result"
                        );
                        continue;
                    }
                    self.apply_prediction_result(message.result);
                }
                JobMessage::ModelInfoFetched(info) => {
                    self.jobs.clear_model_info_fetch();
                    self.apply_model_info(info);
                }
                JobMessage::HealthChecked(result) => {
                    self.jobs.clear_health_check();
                    self.apply_health_check(result);
                }
            }
        }
    }
}

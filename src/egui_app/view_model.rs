//! Display-ready values derived from controller state.

use crate::egui_app::state::ServiceHealth;
use crate::egui_app::ui::style;
use crate::form::display::{self, ConfidenceTone};
use crate::prediction::PredictionResult;
use egui::Color32;

/// Everything the result panel needs to draw one prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub value_text: String,
    pub confidence_text: String,
    pub bar_fraction: f32,
    pub bar_color: Color32,
}

impl ResultView {
    pub fn from_result(result: &PredictionResult) -> Self {
        Self {
            value_text: display::format_prediction(result.predicted_value),
            confidence_text: display::format_confidence(result.confidence),
            bar_fraction: display::confidence_fraction(result.confidence),
            bar_color: style::confidence_color(ConfidenceTone::for_confidence(result.confidence)),
        }
    }
}

/// Short label and colour for the header health dot.
pub fn health_badge(health: &ServiceHealth) -> (&'static str, Color32) {
    let palette = style::palette();
    match health {
        ServiceHealth::Unknown => ("Not checked", palette.text_muted),
        ServiceHealth::Checking => ("Checking", palette.accent),
        ServiceHealth::Ready => ("Online", palette.success),
        ServiceHealth::Degraded(_) => ("Degraded", palette.warning),
        ServiceHealth::Unreachable(_) => ("Offline", palette.error_fg),
    }
}

/// Hover detail for the health dot, if any.
pub fn health_detail(health: &ServiceHealth) -> Option<&str> {
    match health {
        ServiceHealth::Degraded(detail) | ServiceHealth::Unreachable(detail) => Some(detail),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_view_formats_scenario_values() {
        let view = ResultView::from_result(&PredictionResult {
            predicted_value: 42.5,
            confidence: 0.83,
        });
        assert_eq!(view.value_text, "42.50");
        assert_eq!(view.confidence_text, "83.0%");
        assert_eq!(view.bar_color, style::palette().success);
    }

    #[test]
    fn low_confidence_uses_error_color() {
        let view = ResultView::from_result(&PredictionResult {
            predicted_value: 0.0,
            confidence: 0.1,
        });
        assert_eq!(view.bar_color, style::palette().error_fg);
    }

    #[test]
    fn unreachable_health_exposes_detail() {
        let health = ServiceHealth::Unreachable("connection refused".into());
        assert_eq!(health_badge(&health).0, "Offline");
        assert_eq!(health_detail(&health), Some("connection refused"));
        assert_eq!(health_detail(&ServiceHealth::Ready), None);
    }
}

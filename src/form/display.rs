//! Text formatting for prediction results, shared by the UI and the CLI.

/// Colour band of the confidence bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceTone {
    High,
    Medium,
    Low,
}

impl ConfidenceTone {
    /// Above 0.7 is high, above 0.4 medium, anything else low.
    pub fn for_confidence(confidence: f64) -> Self {
        if confidence > 0.7 {
            Self::High
        } else if confidence > 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Predicted value with two decimals, e.g. `42.50`.
pub fn format_prediction(value: f64) -> String {
    format!("{value:.2}")
}

/// Confidence as a percentage with one decimal, e.g. `83.0%`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Fill fraction for the confidence bar, clamped to `[0, 1]`.
pub fn confidence_fraction(confidence: f64) -> f32 {
    if confidence.is_nan() {
        return 0.0;
    }
    confidence.clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prediction_and_confidence() {
        assert_eq!(format_prediction(42.5), "42.50");
        assert_eq!(format_confidence(0.83), "83.0%");
        assert_eq!(format_prediction(-3.14159), "-3.14");
        assert_eq!(format_confidence(1.0), "100.0%");
    }

    #[test]
    fn tone_thresholds_are_exclusive() {
        assert_eq!(ConfidenceTone::for_confidence(0.71), ConfidenceTone::High);
        assert_eq!(ConfidenceTone::for_confidence(0.7), ConfidenceTone::Medium);
        assert_eq!(ConfidenceTone::for_confidence(0.41), ConfidenceTone::Medium);
        assert_eq!(ConfidenceTone::for_confidence(0.4), ConfidenceTone::Low);
        assert_eq!(ConfidenceTone::for_confidence(0.0), ConfidenceTone::Low);
    }

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(confidence_fraction(1.7), 1.0);
        assert_eq!(confidence_fraction(-0.2), 0.0);
        assert_eq!(confidence_fraction(f64::NAN), 0.0);
        assert!((confidence_fraction(0.5) - 0.5).abs() < f32::EPSILON);
    }
}

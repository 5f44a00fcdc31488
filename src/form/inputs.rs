use rand::Rng;

use crate::prediction::{FEATURE_COUNT, FeatureVector};

/// Message shown when any feature cannot be parsed.
pub const INVALID_FEATURES_MESSAGE: &str = "All features must be valid numbers";

const RANDOM_CENTS_RANGE: std::ops::Range<i32> = -5_000..5_000;

/// A feature slot held text that is not a finite number.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("All features must be valid numbers")]
pub struct ValidationError {
    /// First offending slot.
    pub index: usize,
}

/// Raw text of the five feature fields, exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureInputs {
    values: [String; FEATURE_COUNT],
}

impl Default for FeatureInputs {
    fn default() -> Self {
        Self {
            values: std::array::from_fn(|_| "0".to_string()),
        }
    }
}

impl FeatureInputs {
    /// Build from exactly five text fields; `None` for any other count.
    pub fn from_fields<I, S>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let values: [String; FEATURE_COUNT] = fields.try_into().ok()?;
        Some(Self { values })
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Store `text` at `index`. Returns false when the index is out of range.
    pub fn set(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    /// Reset every slot to `"0"`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fill every slot with an independent value in `[-50, 50)`, two decimals.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for slot in &mut self.values {
            let cents = rng.random_range(RANDOM_CENTS_RANGE);
            *slot = format!("{:.2}", f64::from(cents) / 100.0);
        }
    }

    /// Parse all slots, failing on the first one that is not a finite number.
    pub fn parse(&self) -> Result<FeatureVector, ValidationError> {
        let mut parsed = [0.0; FEATURE_COUNT];
        for (index, (raw, out)) in self.values.iter().zip(parsed.iter_mut()).enumerate() {
            *out = parse_feature(raw).ok_or(ValidationError { index })?;
        }
        Ok(parsed)
    }

    /// Comma-separated display of the raw values.
    pub fn joined(&self) -> String {
        self.values.join(", ")
    }
}

fn parse_feature(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

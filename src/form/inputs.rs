use crate::predictor::{Occupation, PredictionRequest};
use serde::Deserialize;
use std::ops::RangeInclusive;

pub const AGE_RANGE: RangeInclusive<i64> = 1..=119;
pub const MIN_WEIGHT: f64 = 1.0;
pub const HEIGHT_RANGE: RangeInclusive<f64> = 0.5..=2.5;
pub const MIN_INCOME_LPA: f64 = 0.1;

/// Widget values as posted by the browser.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormInputs {
    pub age: i64,
    pub weight: f64,
    pub height: f64,
    pub income_lpa: f64,
    pub smoker: bool,
    pub city: String,
    pub occupation: Occupation,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            age: 30,
            weight: 65.0,
            height: 1.7,
            income_lpa: 10.0,
            smoker: true,
            city: "Mumbai".to_string(),
            occupation: Occupation::default(),
        }
    }
}

impl FormInputs {
    /// Pulls every numeric field into its allowed range. Non-finite numbers
    /// fall back to the widget default.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();

        Self {
            age: self.age.clamp(*AGE_RANGE.start(), *AGE_RANGE.end()),
            weight: finite_or(self.weight, defaults.weight).max(MIN_WEIGHT),
            height: finite_or(self.height, defaults.height)
                .clamp(*HEIGHT_RANGE.start(), *HEIGHT_RANGE.end()),
            income_lpa: finite_or(self.income_lpa, defaults.income_lpa).max(MIN_INCOME_LPA),
            smoker: self.smoker,
            city: self.city.clone(),
            occupation: self.occupation,
        }
    }

    /// Builds the request body from the clamped values. City is passed through
    /// untouched.
    pub fn to_request(&self) -> PredictionRequest {
        let inputs = self.clamped();

        PredictionRequest {
            // clamped into 1..=119 above
            age: inputs.age as u32,
            weight: inputs.weight,
            height: inputs.height,
            income_lpa: inputs.income_lpa,
            smoker: inputs.smoker,
            city: inputs.city,
            occupation: inputs.occupation,
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    #[default]
    Retired,
    Freelancer,
    Student,
    GovernmentJob,
    BusinessOwner,
    Unemployed,
    PrivateJob,
}

impl Occupation {
    /// Selector order shown in the form.
    pub const ALL: [Occupation; 7] = [
        Occupation::Retired,
        Occupation::Freelancer,
        Occupation::Student,
        Occupation::GovernmentJob,
        Occupation::BusinessOwner,
        Occupation::Unemployed,
        Occupation::PrivateJob,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Occupation::Retired => "retired",
            Occupation::Freelancer => "freelancer",
            Occupation::Student => "student",
            Occupation::GovernmentJob => "government_job",
            Occupation::BusinessOwner => "business_owner",
            Occupation::Unemployed => "unemployed",
            Occupation::PrivateJob => "private_job",
        }
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of the POST sent to the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub income_lpa: f64,
    pub smoker: bool,
    pub city: String,
    pub occupation: Occupation,
}

/// Envelope of a successful (200) response.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub response: PredictionResult,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResult {
    pub predicted_category: String,
    pub confidence: f64,
    pub class_probabilities: ClassProbabilities,
}

impl PredictionResult {
    /// Every probability must be displayable as a progress bar.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (class, probability) in self.class_probabilities.iter() {
            if !(0.0..=1.0).contains(&probability) {
                return Err(format!(
                    "probability for class '{}' must be within [0.0, 1.0], got {}",
                    class, probability
                ));
            }
        }
        Ok(())
    }
}

/// Per-class probabilities in the order the server returned them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassProbabilities(Vec<(String, f64)>);

impl ClassProbabilities {
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(class, probability)| (class.as_str(), *probability))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, class: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == class)
            .map(|(_, probability)| *probability)
    }

    fn insert(&mut self, class: String, probability: f64) {
        // A repeated key keeps its first position and takes the last value.
        match self.0.iter_mut().find(|(name, _)| *name == class) {
            Some(entry) => entry.1 = probability,
            None => self.0.push((class, probability)),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ClassProbabilities {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut probabilities = ClassProbabilities::default();
        for (class, probability) in iter {
            probabilities.insert(class.into(), probability);
        }
        probabilities
    }
}

impl<'de> Deserialize<'de> for ClassProbabilities {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ProbabilitiesVisitor;

        impl<'de> Visitor<'de> for ProbabilitiesVisitor {
            type Value = ClassProbabilities;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of class label to probability")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut probabilities = ClassProbabilities::default();
                while let Some((class, probability)) = map.next_entry::<String, f64>()? {
                    probabilities.insert(class, probability);
                }
                Ok(probabilities)
            }
        }

        deserializer.deserialize_map(ProbabilitiesVisitor)
    }
}

/// What a single submission ended in. Exactly one variant per submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Success(PredictionResult),
    HttpError { status: u16, body: String },
    ConnectionError,
    UnexpectedError(String),
}

impl SubmitOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitOutcome::Success(_) => "success",
            SubmitOutcome::HttpError { .. } => "http_error",
            SubmitOutcome::ConnectionError => "connection_error",
            SubmitOutcome::UnexpectedError(_) => "unexpected_error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success(_))
    }
}

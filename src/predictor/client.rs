use super::types::*;
use crate::{Result, config::PredictorConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait PredictorClient: Send + Sync {
    /// Sends one prediction request. Never retries; every failure is folded
    /// into the returned outcome.
    async fn predict(&self, request: &PredictionRequest) -> SubmitOutcome;
}

pub struct HttpPredictorClient {
    client: reqwest::Client,
    url: String,
}

impl HttpPredictorClient {
    pub fn new(config: &PredictorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PredictorClient for HttpPredictorClient {
    async fn predict(&self, request: &PredictionRequest) -> SubmitOutcome {
        debug!("POST {} for occupation={} age={}", self.url, request.occupation, request.age);

        let response = match self.client.post(&self.url).json(request).send().await {
            Ok(response) => response,
            Err(e) => return classify_send_error(e),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read predictor response body: {}", e);
                return SubmitOutcome::UnexpectedError(e.to_string());
            }
        };

        if status != StatusCode::OK {
            warn!("Predictor responded with status {}", status.as_u16());
            return SubmitOutcome::HttpError {
                status: status.as_u16(),
                body,
            };
        }

        match parse_prediction(&body) {
            Ok(result) => SubmitOutcome::Success(result),
            Err(message) => {
                warn!("Malformed predictor response: {}", message);
                SubmitOutcome::UnexpectedError(message)
            }
        }
    }
}

/// Parses and validates a 200 response body. Nothing is returned unless the
/// whole result is usable.
pub fn parse_prediction(body: &str) -> std::result::Result<PredictionResult, String> {
    let envelope: PredictResponse = serde_json::from_str(body).map_err(|e| e.to_string())?;
    envelope.response.validate()?;
    Ok(envelope.response)
}

fn classify_send_error(e: reqwest::Error) -> SubmitOutcome {
    if e.is_connect() {
        warn!("Could not connect to predictor: {}", e);
        SubmitOutcome::ConnectionError
    } else {
        warn!("Predictor request failed: {}", e);
        SubmitOutcome::UnexpectedError(e.to_string())
    }
}

use async_trait::async_trait;
use premium_predictor::predictor::{PredictionRequest, PredictorClient, SubmitOutcome};
use std::sync::{Arc, Mutex};

/// Mock predictor client for testing
#[derive(Debug, Clone)]
pub struct MockPredictorClient {
    pub outcome: SubmitOutcome,
    pub requests: Arc<Mutex<Vec<PredictionRequest>>>,
}

impl MockPredictorClient {
    pub fn new(outcome: SubmitOutcome) -> Self {
        Self {
            outcome,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_requests(&self) -> Vec<PredictionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictorClient for MockPredictorClient {
    async fn predict(&self, request: &PredictionRequest) -> SubmitOutcome {
        self.requests.lock().unwrap().push(request.clone());
        self.outcome.clone()
    }
}

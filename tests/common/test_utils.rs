use premium_predictor::{
    config::PredictorConfig,
    predictor::{HttpPredictorClient, PredictionResult},
};
use std::net::TcpListener;
use wiremock::MockServer;

/// Three-class response body, in deliberately unsorted order.
pub const SAMPLE_PREDICTION_BODY: &str = r#"{
  "response": {
    "predicted_category": "Medium",
    "confidence": 0.5821,
    "class_probabilities": {
      "Medium": 0.5821,
      "High": 0.3012,
      "Low": 0.1167
    }
  }
}"#;

/// Form submission matching the defaults, with a private job.
pub const SAMPLE_FORM_BODY: &str =
    "age=30&weight=65.0&height=1.7&income_lpa=10.0&smoker=true&city=Mumbai&occupation=private_job";

pub const SAMPLE_CONFIG_YAML: &str = r#"
predictor:
  url: "http://127.0.0.1:8000/predict"
  timeout_secs: 5

server:
  host: "127.0.0.1"
  port: 8600
  logs:
    level: "debug"
"#;

pub fn sample_result() -> PredictionResult {
    premium_predictor::predictor::parse_prediction(SAMPLE_PREDICTION_BODY).unwrap()
}

/// Client pointed at `/predict` on the mock server.
pub fn client_for(server: &MockServer, timeout_secs: u64) -> HttpPredictorClient {
    HttpPredictorClient::new(&PredictorConfig {
        url: format!("{}/predict", server.uri()),
        timeout_secs,
    })
    .unwrap()
}

/// URL on a local port that nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/predict", port)
}

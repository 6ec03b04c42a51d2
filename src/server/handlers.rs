use super::types::HealthResponse;
use crate::{
    form::{FormInputs, PredictionForm},
    predictor::PredictorClient,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn PredictorClient>,
    pub predictor_url: String,
}

pub async fn index() -> Html<String> {
    Html(PredictionForm::new().render())
}

pub async fn submit(State(state): State<AppState>, Form(inputs): Form<FormInputs>) -> Response {
    info!(
        "Received prediction submission (occupation={}, city={})",
        inputs.occupation, inputs.city
    );

    // Widget values live in the page; each POST starts from the values it carries.
    let mut form = PredictionForm::with_inputs(inputs.clone());
    let submitted = form
        .on_submit(inputs, state.client.as_ref())
        .await
        .map(|outcome| outcome.kind());

    match submitted {
        Ok(kind) => {
            info!("Rendering {} outcome", kind);
            Html(form.render()).into_response()
        }
        Err(e) => {
            error!("Failed to run submission: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(form.render()),
            )
                .into_response()
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        predictor_url: state.predictor_url.clone(),
    })
}

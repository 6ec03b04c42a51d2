use super::fsm::{SubmissionEvent, SubmissionState, SubmissionStateMachine};
use super::inputs::FormInputs;
use super::render;
use crate::{
    Result,
    predictor::{PredictorClient, SubmitOutcome},
};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// One prediction form: the current widget values and the outcome of the
/// latest submission. Earlier outcomes are dropped.
pub struct PredictionForm {
    fsm: SubmissionStateMachine,
    inputs: FormInputs,
    outcome: Option<SubmitOutcome>,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionForm {
    pub fn new() -> Self {
        Self::with_inputs(FormInputs::default())
    }

    pub fn with_inputs(inputs: FormInputs) -> Self {
        Self {
            fsm: SubmissionStateMachine::new(),
            inputs,
            outcome: None,
        }
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    pub fn outcome(&self) -> Option<&SubmitOutcome> {
        self.outcome.as_ref()
    }

    pub fn state(&self) -> SubmissionState {
        self.fsm.current_state()
    }

    /// Runs one submission against `client`. The only error is a submit
    /// while another one is still in flight.
    pub async fn on_submit(
        &mut self,
        inputs: FormInputs,
        client: &dyn PredictorClient,
    ) -> Result<&SubmitOutcome> {
        self.fsm.transition(SubmissionEvent::Submit)?;
        self.outcome = None;

        self.inputs = inputs.clamped();
        let request = self.inputs.to_request();

        let span = info_span!("submission", id = %Uuid::new_v4());
        let outcome = client.predict(&request).instrument(span).await;

        self.fsm.transition(SubmissionEvent::for_outcome(&outcome))?;
        info!("Submission finished with outcome: {}", outcome.kind());

        Ok(&*self.outcome.insert(outcome))
    }

    /// Form with current values, followed by the latest outcome.
    pub fn render(&self) -> String {
        render::render_page(&self.inputs, self.outcome.as_ref())
    }
}

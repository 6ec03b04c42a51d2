mod controller;
pub mod fsm;
pub mod inputs;
pub mod render;

pub use controller::PredictionForm;
pub use fsm::{SubmissionEvent, SubmissionState, SubmissionStateMachine};
pub use inputs::FormInputs;

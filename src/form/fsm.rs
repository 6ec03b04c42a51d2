use crate::{Error, Result, predictor::SubmitOutcome};
use tracing::{debug, info, warn};

// Submission states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    HttpError,
    ConnectionError,
    UnexpectedError,
}

// Submission events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    Submit,
    Succeeded,
    HttpFailed,
    ConnectionFailed,
    Failed,
}

impl SubmissionEvent {
    pub fn for_outcome(outcome: &SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Success(_) => SubmissionEvent::Succeeded,
            SubmitOutcome::HttpError { .. } => SubmissionEvent::HttpFailed,
            SubmitOutcome::ConnectionError => SubmissionEvent::ConnectionFailed,
            SubmitOutcome::UnexpectedError(_) => SubmissionEvent::Failed,
        }
    }
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Success
                | SubmissionState::HttpError
                | SubmissionState::ConnectionError
                | SubmissionState::UnexpectedError
        )
    }
}

/// Idle -> Submitting -> one terminal state. A terminal state goes back
/// through Idle when the next submission starts.
pub struct SubmissionStateMachine {
    state: SubmissionState,
}

impl Default for SubmissionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStateMachine {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    pub fn current_state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn transition(&mut self, event: SubmissionEvent) -> Result<()> {
        let old_state = self.state;
        debug!("FSM processing event {:?} in state {:?}", event, old_state);

        if old_state.is_terminal() && event == SubmissionEvent::Submit {
            debug!("FSM returning to Idle from {:?}", old_state);
            self.state = SubmissionState::Idle;
        }

        let new_state = match (self.state, event) {
            (SubmissionState::Idle, SubmissionEvent::Submit) => SubmissionState::Submitting,
            (SubmissionState::Submitting, SubmissionEvent::Succeeded) => SubmissionState::Success,
            (SubmissionState::Submitting, SubmissionEvent::HttpFailed) => {
                SubmissionState::HttpError
            }
            (SubmissionState::Submitting, SubmissionEvent::ConnectionFailed) => {
                SubmissionState::ConnectionError
            }
            (SubmissionState::Submitting, SubmissionEvent::Failed) => {
                SubmissionState::UnexpectedError
            }
            (SubmissionState::Submitting, SubmissionEvent::Submit) => {
                warn!("Rejected submit while a submission is in flight");
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", old_state),
                    requested: format!("{:?}", event),
                });
            }
            _ => {
                warn!(
                    "Invalid FSM transition from {:?} with event {:?}",
                    old_state, event
                );
                self.state = old_state;
                return Err(Error::fsm(format!(
                    "Invalid transition from {:?} with event {:?}",
                    old_state, event
                )));
            }
        };

        info!(
            "Submission state transition: {:?} -> {:?} (event: {:?})",
            old_state, new_state, event
        );

        self.state = new_state;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_idle() {
        let fsm = SubmissionStateMachine::new();
        assert_eq!(fsm.current_state(), SubmissionState::Idle);
        assert!(!fsm.is_terminal());
    }

    #[test]
    fn test_each_outcome_reaches_its_terminal_state() {
        let cases = [
            (SubmissionEvent::Succeeded, SubmissionState::Success),
            (SubmissionEvent::HttpFailed, SubmissionState::HttpError),
            (SubmissionEvent::ConnectionFailed, SubmissionState::ConnectionError),
            (SubmissionEvent::Failed, SubmissionState::UnexpectedError),
        ];

        for (event, expected) in cases {
            let mut fsm = SubmissionStateMachine::new();
            fsm.transition(SubmissionEvent::Submit).unwrap();
            assert_eq!(fsm.current_state(), SubmissionState::Submitting);

            fsm.transition(event).unwrap();
            assert_eq!(fsm.current_state(), expected);
            assert!(fsm.is_terminal());
        }
    }

    #[test]
    fn test_terminal_state_accepts_next_submit() {
        let mut fsm = SubmissionStateMachine::new();
        fsm.transition(SubmissionEvent::Submit).unwrap();
        fsm.transition(SubmissionEvent::ConnectionFailed).unwrap();

        fsm.transition(SubmissionEvent::Submit).unwrap();
        assert_eq!(fsm.current_state(), SubmissionState::Submitting);
    }

    #[test]
    fn test_concurrent_submit_rejected() {
        let mut fsm = SubmissionStateMachine::new();
        fsm.transition(SubmissionEvent::Submit).unwrap();

        let err = fsm.transition(SubmissionEvent::Submit).unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { .. }));
        assert_eq!(fsm.current_state(), SubmissionState::Submitting);
    }

    #[test]
    fn test_outcome_event_without_submit_rejected() {
        let mut fsm = SubmissionStateMachine::new();
        assert!(fsm.transition(SubmissionEvent::Succeeded).is_err());
        assert_eq!(fsm.current_state(), SubmissionState::Idle);

        fsm.transition(SubmissionEvent::Submit).unwrap();
        fsm.transition(SubmissionEvent::Succeeded).unwrap();
        assert!(fsm.transition(SubmissionEvent::Failed).is_err());
        assert_eq!(fsm.current_state(), SubmissionState::Success);
    }
}

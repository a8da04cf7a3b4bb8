// ABOUTME: Wizard controller for the lead-qualification funnel
// ABOUTME: Owns step index, answer accumulation, and the submission lifecycle

//! Qualification wizard state machine.
//!
//! ```text
//!   Idle(0) ──advance──▶ Idle(1) ──advance──▶ … ──advance──▶ Idle(last)
//!      ▲        ◀─retreat─        ◀─retreat─                    │
//!      │                                                advance │ (gate passes)
//!      │                                                        ▼
//!      │                      Failed ◀──error──────────── Submitting
//!      │                        │                               │
//!      └──── Idle(last) ◀─retry─┘                acknowledgment │
//!                                                               ▼
//!                                                           Complete
//! ```
//!
//! Forward moves are gated by [`gate`](super::gate::gate). The rendering
//! layer is expected to disable the advance control whenever
//! [`WizardController::can_advance`] is false; a refused `advance` leaves the
//! state untouched and reports why.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::gate;
use super::submission::{
    Acknowledgement, LeadSubmission, PendingSubmission, SubmissionBoundary, SubmissionError,
};
use crate::models::{AnswerSet, Step, Steps};

/// Lifecycle of the final submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Complete,
    Failed { reason: String },
}

impl SubmissionStatus {
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Submitting => write!(f, "submitting"),
            Self::Complete => write!(f, "complete"),
            Self::Failed { reason } => write!(f, "failed ({reason})"),
        }
    }
}

/// Snapshot of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    /// Always within `0..step_count`
    pub current_step: usize,
    pub answers: AnswerSet,
    pub status: SubmissionStatus,
}

impl WizardState {
    fn initial() -> Self {
        Self {
            current_step: 0,
            answers: AnswerSet::new(),
            status: SubmissionStatus::Idle,
        }
    }
}

/// Why a transition was refused. The state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("step {step} is incomplete (missing: {})", .missing.join(", "))]
    Incomplete { step: usize, missing: Vec<String> },

    #[error("wizard is {status}, not idle")]
    NotIdle { status: SubmissionStatus },

    #[error("nothing to retry: wizard is {status}")]
    NothingToRetry { status: SubmissionStatus },
}

/// Successful outcome of [`WizardController::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved { from: usize, to: usize },
    Submitting { lead_id: Uuid },
}

pub struct WizardController {
    steps: Steps,
    state: WizardState,
    boundary: Arc<dyn SubmissionBoundary>,
    pending: Option<PendingSubmission>,
    acknowledgement: Option<Acknowledgement>,
}

impl WizardController {
    /// Start a session at step 0 with no answers
    pub fn new(steps: Steps, boundary: Arc<dyn SubmissionBoundary>) -> Self {
        info!(steps = steps.len(), "Qualification wizard initialized");
        Self {
            steps,
            state: WizardState::initial(),
            boundary,
            pending: None,
            acknowledgement: None,
        }
    }

    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    pub const fn status(&self) -> &SubmissionStatus {
        &self.state.status
    }

    pub const fn answers(&self) -> &AnswerSet {
        &self.state.answers
    }

    pub const fn steps(&self) -> &Steps {
        &self.steps
    }

    pub const fn current_index(&self) -> usize {
        self.state.current_step
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.state.current_step]
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_step == self.steps.last_index()
    }

    /// 1-based position and total step count, for display
    pub fn progress(&self) -> (usize, usize) {
        (self.state.current_step + 1, self.steps.len())
    }

    /// Acknowledgment of the completed submission, once `Complete`
    pub const fn acknowledgement(&self) -> Option<&Acknowledgement> {
        self.acknowledgement.as_ref()
    }

    /// Store an answer.
    ///
    /// Returns `false` and ignores the value while a submission is in flight
    /// or complete, so the visible answers never diverge from the payload.
    pub fn record_answer(&mut self, question_id: &str, value: impl Into<String>) -> bool {
        match self.state.status {
            SubmissionStatus::Submitting | SubmissionStatus::Complete => {
                debug!(question = question_id, status = %self.state.status, "Answer ignored");
                false
            }
            SubmissionStatus::Idle | SubmissionStatus::Failed { .. } => {
                self.state.answers.record(question_id, value);
                true
            }
        }
    }

    /// Does the current step pass the gate?
    pub fn can_advance(&self) -> bool {
        gate::gate(self.current_step(), &self.state.answers)
    }

    /// Question ids on the current step still lacking an answer
    pub fn missing_answers(&self) -> Vec<&str> {
        gate::missing(self.current_step(), &self.state.answers)
    }

    /// Move forward one step, or hand off to the boundary from the last step.
    ///
    /// Submission starts a task on the current tokio runtime, so a final-step
    /// advance must run inside one.
    pub fn advance(&mut self) -> Result<Advance, WizardError> {
        if !self.state.status.is_idle() {
            debug!(status = %self.state.status, "Advance refused: not idle");
            return Err(WizardError::NotIdle {
                status: self.state.status.clone(),
            });
        }

        if !self.can_advance() {
            let missing: Vec<String> =
                self.missing_answers().into_iter().map(str::to_string).collect();
            debug!(step = self.state.current_step, missing = ?missing, "Advance refused: gate closed");
            return Err(WizardError::Incomplete {
                step: self.state.current_step,
                missing,
            });
        }

        if !self.is_last_step() {
            let from = self.state.current_step;
            self.state.current_step += 1;
            info!(from, to = self.state.current_step, "Wizard advanced");
            return Ok(Advance::Moved {
                from,
                to: self.state.current_step,
            });
        }

        let lead = LeadSubmission::new(self.state.answers.clone());
        let lead_id = lead.id;
        self.state.status = SubmissionStatus::Submitting;
        self.pending = Some(PendingSubmission::spawn(Arc::clone(&self.boundary), lead));
        info!(lead_id = %lead_id, answers = self.state.answers.len(), "Submitting qualification");

        Ok(Advance::Submitting { lead_id })
    }

    /// Step back one page; no-op at step 0 and outside `Idle`.
    ///
    /// Answers are kept.
    pub fn retreat(&mut self) -> bool {
        if !self.state.status.is_idle() || self.state.current_step == 0 {
            return false;
        }
        self.state.current_step -= 1;
        debug!(to = self.state.current_step, "Wizard retreated");
        true
    }

    /// Return from `Failed` to the last step so the visitor can submit again
    pub fn retry(&mut self) -> Result<(), WizardError> {
        if !matches!(self.state.status, SubmissionStatus::Failed { .. }) {
            return Err(WizardError::NothingToRetry {
                status: self.state.status.clone(),
            });
        }
        self.state.status = SubmissionStatus::Idle;
        self.state.current_step = self.steps.last_index();
        info!("Submission retry armed");
        Ok(())
    }

    /// Non-blocking check for the submission outcome; call once per tick
    pub fn poll_submission(&mut self) -> &SubmissionStatus {
        let outcome = self.pending.as_mut().and_then(PendingSubmission::try_outcome);
        if let Some(outcome) = outcome {
            self.finish_submission(outcome);
        }
        &self.state.status
    }

    /// Wait for the in-flight submission, if any, and apply its outcome
    pub async fn settle(&mut self) -> &SubmissionStatus {
        if let Some(pending) = self.pending.as_mut() {
            let outcome = pending.outcome().await;
            self.finish_submission(outcome);
        }
        &self.state.status
    }

    fn finish_submission(&mut self, outcome: Result<Acknowledgement, SubmissionError>) {
        let lead_id = self.pending.take().map(|p| p.lead_id());
        match outcome {
            Ok(ack) => {
                info!(lead_id = %ack.lead_id, "Qualification complete");
                self.acknowledgement = Some(ack);
                self.state.status = SubmissionStatus::Complete;
            }
            Err(e) => {
                warn!(lead_id = ?lead_id, error = %e, "Qualification submission failed");
                self.state.status = SubmissionStatus::Failed {
                    reason: e.to_string(),
                };
            }
        }
    }
}

impl fmt::Debug for WizardController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardController")
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funnel::submission::{MockSubmissionBoundary, SimulatedIntake};
    use crate::models::qualification_steps;
    use chrono::Utc;
    use std::time::Duration;

    fn wizard() -> WizardController {
        WizardController::new(
            qualification_steps().unwrap(),
            Arc::new(SimulatedIntake::default()),
        )
    }

    fn fill_current(wizard: &mut WizardController) {
        let ids: Vec<String> = wizard.current_step().questions.iter().map(|q| q.id.clone()).collect();
        for id in ids {
            wizard.record_answer(&id, "x");
        }
    }

    #[test]
    fn test_initial_state() {
        let wizard = wizard();
        assert_eq!(wizard.current_index(), 0);
        assert!(wizard.answers().is_empty());
        assert_eq!(wizard.status(), &SubmissionStatus::Idle);
        assert_eq!(wizard.progress(), (1, 3));
    }

    #[test]
    fn test_refused_advance_leaves_state_untouched() {
        let mut wizard = wizard();
        wizard.record_answer("name", "Jo");
        let before = wizard.state().clone();

        for _ in 0..5 {
            let err = wizard.advance().unwrap_err();
            assert!(matches!(err, WizardError::Incomplete { step: 0, .. }));
        }
        assert_eq!(wizard.state(), &before);
    }

    #[test]
    fn test_incomplete_error_lists_missing_ids() {
        let mut wizard = wizard();
        wizard.record_answer("email", "  ");
        let err = wizard.advance().unwrap_err();
        assert_eq!(
            err,
            WizardError::Incomplete {
                step: 0,
                missing: vec!["name".into(), "email".into(), "experience".into()],
            }
        );
        assert_eq!(
            err.to_string(),
            "step 0 is incomplete (missing: name, email, experience)"
        );
    }

    #[test]
    fn test_retreat_keeps_answers_and_floors_at_zero() {
        let mut wizard = wizard();
        assert!(!wizard.retreat());
        fill_current(&mut wizard);
        assert_eq!(wizard.advance(), Ok(Advance::Moved { from: 0, to: 1 }));

        assert!(wizard.retreat());
        assert!(!wizard.retreat());
        assert_eq!(wizard.current_index(), 0);
        assert!(wizard.can_advance());
        assert_eq!(wizard.answers().get("name"), Some("x"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_step_submits_then_completes() {
        let mut wizard = wizard();
        for _ in 0..2 {
            fill_current(&mut wizard);
            wizard.advance().unwrap();
        }
        fill_current(&mut wizard);

        let advance = wizard.advance().unwrap();
        assert!(matches!(advance, Advance::Submitting { .. }));
        assert_eq!(wizard.status(), &SubmissionStatus::Submitting);
        assert_eq!(wizard.poll_submission(), &SubmissionStatus::Submitting);

        assert_eq!(wizard.settle().await, &SubmissionStatus::Complete);
        let Advance::Submitting { lead_id } = advance else { unreachable!() };
        assert_eq!(wizard.acknowledgement().map(|a| a.lead_id), Some(lead_id));

        assert!(matches!(wizard.advance(), Err(WizardError::NotIdle { .. })));
        assert!(!wizard.retreat());
        assert!(!wizard.record_answer("name", "changed"));
        assert_eq!(wizard.answers().get("name"), Some("x"));
    }

    #[tokio::test]
    async fn test_failure_then_retry_resubmits() {
        let mut mock = MockSubmissionBoundary::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_accept()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(SubmissionError::Rejected("duplicate".to_string())));
        mock.expect_accept()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|lead| {
                Ok(Acknowledgement {
                    lead_id: lead.id,
                    received_at: Utc::now(),
                })
            });

        let steps = Steps::new(vec![qualification_steps().unwrap()[0].clone()]).unwrap();
        let mut wizard = WizardController::new(steps, Arc::new(mock));
        fill_current(&mut wizard);

        wizard.advance().unwrap();
        assert_eq!(
            wizard.settle().await,
            &SubmissionStatus::Failed {
                reason: "lead rejected: duplicate".to_string()
            }
        );
        assert!(matches!(wizard.advance(), Err(WizardError::NotIdle { .. })));

        wizard.retry().unwrap();
        assert_eq!(wizard.status(), &SubmissionStatus::Idle);
        assert_eq!(wizard.current_index(), 0);

        wizard.advance().unwrap();
        assert_eq!(wizard.settle().await, &SubmissionStatus::Complete);
    }

    #[test]
    fn test_retry_outside_failed_is_refused() {
        let mut wizard = wizard();
        assert_eq!(
            wizard.retry(),
            Err(WizardError::NothingToRetry {
                status: SubmissionStatus::Idle
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_observes_completion_after_latency() {
        let steps = Steps::new(vec![qualification_steps().unwrap()[1].clone()]).unwrap();
        let mut wizard = WizardController::new(
            steps,
            Arc::new(SimulatedIntake::new(Duration::from_millis(200))),
        );
        fill_current(&mut wizard);
        wizard.advance().unwrap();

        tokio::time::advance(Duration::from_millis(100)).await;
        assert_eq!(wizard.poll_submission(), &SubmissionStatus::Submitting);

        tokio::time::sleep(Duration::from_millis(150)).await;
        for _ in 0..10 {
            if wizard.poll_submission().is_terminal() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(wizard.status(), &SubmissionStatus::Complete);
    }
}

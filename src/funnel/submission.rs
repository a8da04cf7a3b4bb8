// ABOUTME: Submission boundary abstracting the external lead-intake call
// ABOUTME: Defines the async contract, the simulated fixed-latency intake, and the in-flight guard

//! Lead submission boundary.
//!
//! The wizard hands its final answer set to a [`SubmissionBoundary`] once the
//! last step passes the gate. The call runs on a tokio task owned by a
//! [`PendingSubmission`]; the wizard polls it once per event-loop tick and
//! dropping the guard aborts the call.
//!
//! No wire contract is defined here. [`SimulatedIntake`] stands in for a real
//! lead-intake service by acknowledging after a fixed latency.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::FutureExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::AnswerSet;

/// Default latency of the simulated intake
pub const DEFAULT_SUBMISSION_LATENCY: Duration = Duration::from_millis(1500);

/// Errors surfaced by the lead-intake boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The intake service refused the lead
    #[error("lead rejected: {0}")]
    Rejected(String),

    /// The intake service could not be reached
    #[error("intake unavailable: {0}")]
    Unavailable(String),

    /// The in-flight call was aborted or its task panicked
    #[error("submission cancelled: {0}")]
    Cancelled(String),
}

/// Payload handed to the boundary on funnel completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub answers: AnswerSet,
}

impl LeadSubmission {
    pub fn new(answers: AnswerSet) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            answers,
        }
    }
}

/// Successful acknowledgment from the intake service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub lead_id: Uuid,
    pub received_at: DateTime<Utc>,
}

/// Asynchronous lead-intake capability
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionBoundary: Send + Sync {
    /// Accept a completed lead; resolves once the intake has acknowledged or failed
    async fn accept(&self, lead: LeadSubmission) -> Result<Acknowledgement, SubmissionError>;
}

/// Intake that always succeeds after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedIntake {
    latency: Duration,
}

impl SimulatedIntake {
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedIntake {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMISSION_LATENCY)
    }
}

#[async_trait]
impl SubmissionBoundary for SimulatedIntake {
    async fn accept(&self, lead: LeadSubmission) -> Result<Acknowledgement, SubmissionError> {
        info!(
            lead_id = %lead.id,
            answers = lead.answers.len(),
            latency_ms = %self.latency.as_millis(),
            "Simulated intake received lead"
        );
        tokio::time::sleep(self.latency).await;
        Ok(Acknowledgement {
            lead_id: lead.id,
            received_at: Utc::now(),
        })
    }
}

/// An in-flight call to the boundary.
///
/// Owns the tokio task running [`SubmissionBoundary::accept`]. Dropping the
/// guard aborts the task.
pub struct PendingSubmission {
    lead_id: Uuid,
    handle: JoinHandle<Result<Acknowledgement, SubmissionError>>,
}

impl PendingSubmission {
    /// Start the call on the current tokio runtime.
    ///
    /// Must be called from within a runtime context.
    pub fn spawn(boundary: Arc<dyn SubmissionBoundary>, lead: LeadSubmission) -> Self {
        let lead_id = lead.id;
        let handle = tokio::spawn(async move { boundary.accept(lead).await });
        debug!(lead_id = %lead_id, "Submission task spawned");
        Self { lead_id, handle }
    }

    pub const fn lead_id(&self) -> Uuid {
        self.lead_id
    }

    /// Non-blocking check for the outcome.
    ///
    /// Once this returns `Some`, the guard is spent and must be dropped.
    pub fn try_outcome(&mut self) -> Option<Result<Acknowledgement, SubmissionError>> {
        (&mut self.handle).now_or_never().map(Self::flatten)
    }

    /// Wait for the outcome. The guard is spent afterwards.
    pub async fn outcome(&mut self) -> Result<Acknowledgement, SubmissionError> {
        Self::flatten((&mut self.handle).await)
    }

    fn flatten(
        joined: Result<Result<Acknowledgement, SubmissionError>, JoinError>,
    ) -> Result<Acknowledgement, SubmissionError> {
        joined.unwrap_or_else(|e| Err(SubmissionError::Cancelled(e.to_string())))
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl std::fmt::Debug for PendingSubmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingSubmission")
            .field("lead_id", &self.lead_id)
            .field("finished", &self.handle.is_finished())
            .finish()
    }
}

// ABOUTME: Lead-qualification funnel: validation gate, submission boundary, and wizard controller

pub mod controller;
pub mod gate;
pub mod submission;

pub use controller::{Advance, SubmissionStatus, WizardController, WizardError, WizardState};
pub use gate::gate;
pub use submission::{
    Acknowledgement, LeadSubmission, PendingSubmission, SimulatedIntake, SubmissionBoundary,
    SubmissionError, DEFAULT_SUBMISSION_LATENCY,
};

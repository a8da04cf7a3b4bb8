// ABOUTME: Application state for the TUI: funnel and carousel controllers plus view state
// ABOUTME: App owns the autoplay tick channel and drives per-tick polling

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ratatui::layout::Rect;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::carousel::{AutoplayTick, CarouselController};
use crate::config::{LocaleStrings, SiteConfig, UiVariant};
use crate::funnel::{SimulatedIntake, SubmissionBoundary, SubmissionStatus, WizardController};
use crate::models::{default_testimonials, qualification_steps, QuestionKind};

/// How long the completion toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Funnel,
    Testimonials,
}

impl View {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Funnel => Self::Testimonials,
            Self::Testimonials => Self::Funnel,
        }
    }
}

/// Transient notification shown in the corner
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(title: &str, body: &str, duration: Duration) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

pub struct AppState {
    pub current_view: View,
    pub show_help: bool,
    pub should_quit: bool,
    pub locale: LocaleStrings,
    pub variant: UiVariant,
    pub wizard: WizardController,
    /// Question with keyboard focus on the current step
    pub focused_question: usize,
    pub carousel: CarouselController,
    /// Last refused transition, shown in the footer until the next action
    pub notice: Option<String>,
    pub toast: Option<Toast>,
    /// Screen area of the carousel panel from the last render, for hover hit-testing
    pub carousel_area: Option<Rect>,
    /// Submission status seen on the previous tick
    last_status: SubmissionStatus,
}

impl AppState {
    pub fn new(config: &SiteConfig, boundary: Arc<dyn SubmissionBoundary>) -> Result<Self> {
        let steps = qualification_steps().context("Invalid qualification steps")?;
        let carousel = CarouselController::new(default_testimonials(), config.carousel.settings())
            .context("Invalid testimonial catalogue")?;

        Ok(Self {
            current_view: View::Funnel,
            show_help: false,
            should_quit: false,
            locale: config.locale.clone(),
            variant: config.ui.variant,
            wizard: WizardController::new(steps, boundary),
            focused_question: 0,
            carousel,
            notice: None,
            toast: None,
            carousel_area: None,
            last_status: SubmissionStatus::Idle,
        })
    }

    /// Kind of the focused question, if the current step has one at that index
    pub fn focused_kind(&self) -> Option<QuestionKind> {
        self.wizard
            .current_step()
            .questions
            .get(self.focused_question)
            .map(|q| q.kind)
    }

    pub fn focus_next_question(&mut self) {
        let count = self.wizard.current_step().questions.len();
        self.focused_question = (self.focused_question + 1) % count;
    }

    pub fn focus_previous_question(&mut self) {
        let count = self.wizard.current_step().questions.len();
        self.focused_question = (self.focused_question + count - 1) % count;
    }

    /// Append a character to the focused free-text answer
    pub fn input_char(&mut self, c: char) {
        let Some(question) = self.wizard.current_step().questions.get(self.focused_question) else {
            return;
        };
        if question.kind != QuestionKind::FreeText {
            return;
        }
        let id = question.id.clone();
        let mut value = self.wizard.answers().get(&id).unwrap_or_default().to_string();
        value.push(c);
        self.wizard.record_answer(&id, value);
    }

    pub fn backspace(&mut self) {
        let Some(question) = self.wizard.current_step().questions.get(self.focused_question) else {
            return;
        };
        if question.kind != QuestionKind::FreeText {
            return;
        }
        let id = question.id.clone();
        let mut value = self.wizard.answers().get(&id).unwrap_or_default().to_string();
        if value.pop().is_some() {
            self.wizard.record_answer(&id, value);
        }
    }

    /// Move the selection of the focused choice question by `delta` options
    pub fn cycle_option(&mut self, delta: isize) {
        let Some(question) = self.wizard.current_step().questions.get(self.focused_question) else {
            return;
        };
        if question.kind != QuestionKind::SingleChoice || question.options.is_empty() {
            return;
        }

        let count = question.options.len() as isize;
        let next = match self.wizard.answers().get(&question.id).and_then(|v| question.option_index(v)) {
            Some(current) => (current as isize + delta).rem_euclid(count),
            None if delta >= 0 => 0,
            None => count - 1,
        };
        let id = question.id.clone();
        let value = question.options[next as usize].value.clone();
        self.wizard.record_answer(&id, value);
    }

    pub fn advance(&mut self) {
        match self.wizard.advance() {
            Ok(outcome) => {
                debug!(?outcome, "Funnel advance accepted");
                self.focused_question = 0;
                self.notice = None;
            }
            Err(e) => {
                debug!(error = %e, "Funnel advance refused");
                self.notice = Some(e.to_string());
            }
        }
    }

    pub fn retreat(&mut self) {
        if self.wizard.retreat() {
            self.focused_question = 0;
            self.notice = None;
        }
    }

    pub fn retry(&mut self) {
        match self.wizard.retry() {
            Ok(()) => self.notice = None,
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    /// The pointer is over the carousel panel, when it is on screen
    pub fn pointer_over_carousel(&self, column: u16, row: u16) -> bool {
        self.current_view == View::Testimonials
            && self
                .carousel_area
                .is_some_and(|area| {
                    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
                })
    }

    /// Per-tick housekeeping: submission polling and toast expiry
    pub fn on_tick(&mut self, now: Instant) {
        let status = self.wizard.poll_submission().clone();
        if status != self.last_status {
            if status == SubmissionStatus::Complete {
                self.toast = Some(Toast::new(
                    &self.locale.toast_title,
                    &self.locale.toast_body,
                    TOAST_DURATION,
                ));
            }
            self.last_status = status;
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }
}

/// The running application: state plus the autoplay tick channel
pub struct App {
    pub state: AppState,
    ticks_tx: UnboundedSender<AutoplayTick>,
    ticks_rx: UnboundedReceiver<AutoplayTick>,
}

impl App {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let boundary = Arc::new(SimulatedIntake::new(config.funnel.submission_latency()));
        Self::with_boundary(config, boundary)
    }

    pub fn with_boundary(config: &SiteConfig, boundary: Arc<dyn SubmissionBoundary>) -> Result<Self> {
        let (ticks_tx, ticks_rx) = mpsc::unbounded_channel();
        Ok(Self {
            state: AppState::new(config, boundary)?,
            ticks_tx,
            ticks_rx,
        })
    }

    /// Acquire the carousel autoplay timer. Needs a tokio runtime.
    pub fn start(&mut self) {
        self.state.carousel.attach(self.ticks_tx.clone());
        info!("Application started");
    }

    /// Release the autoplay timer
    pub fn shutdown(&mut self) {
        self.state.carousel.detach();
        info!("Application stopped");
    }

    /// Drain queued autoplay ticks and run per-tick housekeeping
    pub fn tick(&mut self) {
        while let Ok(tick) = self.ticks_rx.try_recv() {
            self.state.carousel.on_tick(tick);
        }
        self.state.on_tick(Instant::now());
    }

    /// Wait for the next autoplay tick and apply it; returns whether the carousel advanced
    pub async fn next_autoplay_tick(&mut self) -> Option<bool> {
        let tick = self.ticks_rx.recv().await?;
        Some(self.state.carousel.on_tick(tick))
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.state.carousel.detach();
    }
}

// ABOUTME: Testimonial carousel controller composing pure state and the autoplay timer
// ABOUTME: Applies the configured cadence policy and ignores ticks from released timers

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use super::autoplay::{AutoplayTick, AutoplayTimer, DEFAULT_AUTOPLAY_INTERVAL};
use super::state::{CarouselError, CarouselState};
use crate::models::Testimonial;

/// What manual navigation does to the autoplay schedule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoplayCadence {
    /// The timer keeps its original schedule regardless of interaction
    #[default]
    Fixed,
    /// Manual next/previous/go-to restarts the interval from zero
    RestartOnInteraction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSettings {
    pub interval: Duration,
    pub cadence: AutoplayCadence,
    pub autoplay: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_AUTOPLAY_INTERVAL,
            cadence: AutoplayCadence::Fixed,
            autoplay: true,
        }
    }
}

pub struct CarouselController {
    state: CarouselState,
    testimonials: Vec<Testimonial>,
    settings: CarouselSettings,
    timer: Option<AutoplayTimer>,
    ticks: Option<UnboundedSender<AutoplayTick>>,
    generation: u64,
}

impl CarouselController {
    pub fn new(
        testimonials: Vec<Testimonial>,
        settings: CarouselSettings,
    ) -> Result<Self, CarouselError> {
        let mut state = CarouselState::new(testimonials.len())?;
        state.set_autoplay(settings.autoplay);
        Ok(Self {
            state,
            testimonials,
            settings,
            timer: None,
            ticks: None,
            generation: 0,
        })
    }

    pub const fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn active(&self) -> &Testimonial {
        &self.testimonials[self.state.active_index()]
    }

    pub const fn is_attached(&self) -> bool {
        self.timer.is_some()
    }

    /// Generation of the running timer; ticks carrying any other value are stale
    pub fn live_generation(&self) -> Option<u64> {
        self.timer.as_ref().map(AutoplayTimer::generation)
    }

    /// Acquire the autoplay timer; ticks are delivered on `ticks`.
    ///
    /// Re-attaching replaces the previous timer. Needs a tokio runtime.
    pub fn attach(&mut self, ticks: UnboundedSender<AutoplayTick>) {
        self.ticks = Some(ticks);
        self.start_timer();
        info!(interval_ms = %self.settings.interval.as_millis(), cadence = ?self.settings.cadence, "Carousel attached");
    }

    /// Release the autoplay timer
    pub fn detach(&mut self) {
        self.ticks = None;
        if self.timer.take().is_some() {
            info!("Carousel detached");
        }
    }

    fn start_timer(&mut self) {
        let Some(ticks) = self.ticks.clone() else {
            return;
        };
        self.generation += 1;
        // Replacing the old guard aborts its task
        self.timer = Some(AutoplayTimer::spawn(
            self.settings.interval,
            self.generation,
            ticks,
        ));
    }

    fn after_manual_navigation(&mut self) {
        if self.settings.cadence == AutoplayCadence::RestartOnInteraction && self.is_attached() {
            self.start_timer();
        }
    }

    pub fn next(&mut self) {
        self.state.next();
        self.after_manual_navigation();
    }

    pub fn previous(&mut self) {
        self.state.previous();
        self.after_manual_navigation();
    }

    pub fn go_to(&mut self, index: usize) {
        self.state.go_to(index);
        self.after_manual_navigation();
    }

    pub fn hover_enter(&mut self) {
        if self.state.hover_enter() {
            debug!("Carousel hovered, autoplay suppressed");
        }
    }

    pub fn hover_leave(&mut self) {
        if self.state.hover_leave() {
            debug!("Carousel hover left, autoplay resumed");
        }
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        self.state.set_autoplay(enabled);
        info!(enabled, "Carousel autoplay toggled");
    }

    pub fn toggle_autoplay(&mut self) {
        self.set_autoplay(!self.state.autoplay_enabled());
    }

    /// Apply a timer firing; returns whether the carousel advanced
    pub fn on_tick(&mut self, tick: AutoplayTick) -> bool {
        let live = self.live_generation();
        if live != Some(tick.generation) {
            debug!(tick = tick.generation, live = ?live, "Stale autoplay tick ignored");
            return false;
        }
        self.state.on_tick()
    }
}

impl std::fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("state", &self.state)
            .field("settings", &self.settings)
            .field("generation", &self.generation)
            .field("attached", &self.is_attached())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_testimonials;
    use tokio::sync::mpsc;

    fn carousel(cadence: AutoplayCadence) -> CarouselController {
        CarouselController::new(
            default_testimonials(),
            CarouselSettings {
                cadence,
                ..CarouselSettings::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_catalogue() {
        let err = CarouselController::new(vec![], CarouselSettings::default()).unwrap_err();
        assert_eq!(err, CarouselError::Empty);
    }

    #[test]
    fn test_manual_navigation_without_timer() {
        let mut carousel = carousel(AutoplayCadence::RestartOnInteraction);
        carousel.previous();
        assert_eq!(carousel.active().author, "David Park");
        carousel.go_to(5);
        assert_eq!(carousel.state().active_index(), 1);
        assert!(!carousel.is_attached());
    }

    #[test]
    fn test_autoplay_disabled_by_settings() {
        let carousel = CarouselController::new(
            default_testimonials(),
            CarouselSettings {
                autoplay: false,
                ..CarouselSettings::default()
            },
        )
        .unwrap();
        assert!(!carousel.state().autoplay_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_from_released_timer_is_ignored() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut carousel = carousel(AutoplayCadence::Fixed);
        carousel.attach(tx.clone());

        let first = rx.recv().await.unwrap();
        carousel.attach(tx);

        assert!(!carousel.on_tick(first));
        assert_eq!(carousel.state().active_index(), 0);

        let fresh = rx.recv().await.unwrap();
        assert!(carousel.on_tick(fresh));
        assert_eq!(carousel.state().active_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_detach_releases_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut carousel = carousel(AutoplayCadence::Fixed);
        carousel.attach(tx);
        assert!(carousel.is_attached());

        carousel.detach();
        assert!(!carousel.is_attached());
        assert!(rx.recv().await.is_none());
        assert!(!carousel.on_tick(AutoplayTick { generation: 1 }));
    }
}

// ABOUTME: Integration tests for carousel autoplay cadence, hover suppression, and timer teardown
// All tests run on a paused tokio clock so tick times are exact

use std::sync::Arc;
use std::time::Duration;

use brandmagnet::app::App;
use brandmagnet::carousel::{AutoplayCadence, AutoplayTick, CarouselController, CarouselSettings};
use brandmagnet::config::SiteConfig;
use brandmagnet::funnel::SimulatedIntake;
use brandmagnet::models::default_testimonials;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::{sleep, Instant};

const PERIOD: Duration = Duration::from_secs(6);

fn attached(cadence: AutoplayCadence) -> (CarouselController, UnboundedReceiver<AutoplayTick>) {
    let mut carousel = CarouselController::new(
        default_testimonials(),
        CarouselSettings {
            cadence,
            ..CarouselSettings::default()
        },
    )
    .unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    carousel.attach(tx);
    (carousel, rx)
}

/// Receive ticks until one comes from the live timer; returns whether it advanced
async fn next_live_tick(
    carousel: &mut CarouselController,
    rx: &mut UnboundedReceiver<AutoplayTick>,
) -> bool {
    loop {
        let tick = rx.recv().await.unwrap();
        if carousel.live_generation() == Some(tick.generation) {
            return carousel.on_tick(tick);
        }
    }
}

fn assert_elapsed_near(start: Instant, expected: Duration) {
    let elapsed = start.elapsed();
    assert!(
        elapsed >= expected && elapsed < expected + Duration::from_secs(1),
        "expected ~{expected:?}, got {elapsed:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn test_autoplay_advances_every_period() {
    let start = Instant::now();
    let (mut carousel, mut rx) = attached(AutoplayCadence::Fixed);

    for expected in 1..=5 {
        assert!(next_live_tick(&mut carousel, &mut rx).await);
        assert_elapsed_near(start, PERIOD * expected);
        assert_eq!(carousel.state().active_index(), expected as usize % 4);
    }
}

#[tokio::test(start_paused = true)]
async fn test_fixed_cadence_ignores_manual_navigation() {
    let start = Instant::now();
    let (mut carousel, mut rx) = attached(AutoplayCadence::Fixed);

    sleep(Duration::from_secs(3)).await;
    carousel.next();
    assert_eq!(carousel.state().active_index(), 1);

    assert!(next_live_tick(&mut carousel, &mut rx).await);
    assert_elapsed_near(start, PERIOD);
    assert_eq!(carousel.state().active_index(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_restart_cadence_resets_interval_on_navigation() {
    let start = Instant::now();
    let (mut carousel, mut rx) = attached(AutoplayCadence::RestartOnInteraction);

    sleep(Duration::from_secs(3)).await;
    carousel.go_to(2);

    assert!(next_live_tick(&mut carousel, &mut rx).await);
    assert_elapsed_near(start, Duration::from_secs(3) + PERIOD);
    assert_eq!(carousel.state().active_index(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_hover_suppresses_ticks_until_leave() {
    let start = Instant::now();
    let (mut carousel, mut rx) = attached(AutoplayCadence::Fixed);

    sleep(Duration::from_secs(1)).await;
    carousel.hover_enter();

    // The 6s tick arrives while hovered and is swallowed
    assert!(!next_live_tick(&mut carousel, &mut rx).await);
    assert_elapsed_near(start, PERIOD);
    assert_eq!(carousel.state().active_index(), 0);

    sleep(Duration::from_secs(1)).await;
    carousel.hover_leave();

    assert!(next_live_tick(&mut carousel, &mut rx).await);
    assert_elapsed_near(start, PERIOD * 2);
    assert_eq!(carousel.state().active_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_disabled_autoplay_keeps_position() {
    let (mut carousel, mut rx) = attached(AutoplayCadence::Fixed);
    carousel.toggle_autoplay();
    assert!(!carousel.state().autoplay_enabled());

    assert!(!next_live_tick(&mut carousel, &mut rx).await);
    assert_eq!(carousel.state().active_index(), 0);

    carousel.toggle_autoplay();
    assert!(next_live_tick(&mut carousel, &mut rx).await);
    assert_eq!(carousel.state().active_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_detach_stops_delivery() {
    let (mut carousel, mut rx) = attached(AutoplayCadence::Fixed);
    assert!(carousel.is_attached());

    carousel.detach();
    assert!(!carousel.is_attached());

    // Every sender is gone, so the channel closes instead of ticking
    assert_eq!(rx.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_app_drives_autoplay_between_start_and_shutdown() {
    let start = Instant::now();
    let mut app = App::with_boundary(&SiteConfig::default(), Arc::new(SimulatedIntake::default()))
        .unwrap();
    assert!(!app.state.carousel.is_attached());

    app.start();
    assert!(app.state.carousel.is_attached());
    assert_eq!(app.next_autoplay_tick().await, Some(true));
    assert_elapsed_near(start, PERIOD);
    assert_eq!(app.state.carousel.state().active_index(), 1);

    app.shutdown();
    assert!(!app.state.carousel.is_attached());
}

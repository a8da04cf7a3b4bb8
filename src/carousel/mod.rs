// ABOUTME: Testimonial carousel: circular navigation with hover-suppressed autoplay

pub mod autoplay;
pub mod controller;
pub mod state;

pub use autoplay::{AutoplayTick, AutoplayTimer, DEFAULT_AUTOPLAY_INTERVAL};
pub use controller::{AutoplayCadence, CarouselController, CarouselSettings};
pub use state::{CarouselError, CarouselState};

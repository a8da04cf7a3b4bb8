// ABOUTME: Pure state transitions for the testimonial carousel
// Circular index navigation plus the autoplay/hover flags that gate timer ticks

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    /// Always within `0..len`
    active_index: usize,
    len: usize,
    autoplay_enabled: bool,
    hovered: bool,
}

impl CarouselState {
    pub const fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            active_index: 0,
            len,
            autoplay_enabled: true,
            hovered: false,
        })
    }

    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    pub const fn item_count(&self) -> usize {
        self.len
    }

    pub const fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    pub const fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn next(&mut self) {
        self.active_index = (self.active_index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.active_index = (self.active_index + self.len - 1) % self.len;
    }

    /// Jump directly; out-of-range indices wrap
    pub fn go_to(&mut self, index: usize) {
        self.active_index = index % self.len;
    }

    /// Returns whether the flag changed
    pub fn hover_enter(&mut self) -> bool {
        !std::mem::replace(&mut self.hovered, true)
    }

    /// Returns whether the flag changed
    pub fn hover_leave(&mut self) -> bool {
        std::mem::replace(&mut self.hovered, false)
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay_enabled = enabled;
    }

    /// Would an autoplay tick advance the carousel right now?
    pub const fn accepts_ticks(&self) -> bool {
        self.autoplay_enabled && !self.hovered
    }

    /// Apply one autoplay firing; returns whether the carousel advanced
    pub fn on_tick(&mut self) -> bool {
        if !self.accepts_ticks() {
            return false;
        }
        self.next();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CarouselState::new(4).unwrap();
        assert_eq!(state.active_index(), 0);
        assert!(state.autoplay_enabled());
        assert!(!state.hovered());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(CarouselState::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut state = CarouselState::new(4).unwrap();
        state.previous();
        assert_eq!(state.active_index(), 3);
        state.next();
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 1..=6 {
            for start in 0..len {
                let mut state = CarouselState::new(len).unwrap();
                state.go_to(start);
                for _ in 0..len {
                    state.next();
                }
                assert_eq!(state.active_index(), start);
                for _ in 0..len {
                    state.previous();
                }
                assert_eq!(state.active_index(), start);
            }
        }
    }

    #[test]
    fn test_go_to_wraps_out_of_range() {
        let mut state = CarouselState::new(4).unwrap();
        state.go_to(2);
        assert_eq!(state.active_index(), 2);
        state.go_to(9);
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn test_single_item_is_fixed_point() {
        let mut state = CarouselState::new(1).unwrap();
        state.next();
        state.previous();
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_ticks_suppressed_by_hover_or_disabled_autoplay() {
        let mut state = CarouselState::new(3).unwrap();
        assert!(state.hover_enter());
        assert!(!state.hover_enter());
        assert!(!state.on_tick());
        assert_eq!(state.active_index(), 0);

        assert!(state.hover_leave());
        assert!(!state.hover_leave());
        assert!(state.on_tick());
        assert_eq!(state.active_index(), 1);

        state.set_autoplay(false);
        assert!(!state.on_tick());
        assert_eq!(state.active_index(), 1);
    }
}

// ABOUTME: Event handling system for keyboard and mouse input and app actions

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::app::{state::View, AppState};
use crate::models::QuestionKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    SwitchView,
    // Funnel events
    FunnelFocusNext,
    FunnelFocusPrevious,
    FunnelInputChar(char),
    FunnelBackspace,
    FunnelNextOption,
    FunnelPreviousOption,
    FunnelAdvance,
    FunnelRetreat,
    FunnelRetry,
    // Carousel events
    CarouselNext,
    CarouselPrevious,
    CarouselGoTo(usize),
    CarouselToggleAutoplay,
    CarouselHoverEnter,
    CarouselHoverLeave,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('c') => Some(AppEvent::Quit),
                KeyCode::Char('b') if state.current_view == View::Funnel => {
                    Some(AppEvent::FunnelRetreat)
                }
                KeyCode::Char('r') if state.current_view == View::Funnel => {
                    Some(AppEvent::FunnelRetry)
                }
                _ => None,
            };
        }

        if state.show_help {
            return match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Tab => return Some(AppEvent::SwitchView),
            KeyCode::Esc => return Some(AppEvent::Quit),
            KeyCode::F(1) => return Some(AppEvent::ToggleHelp),
            _ => {}
        }

        match state.current_view {
            View::Funnel => Self::handle_funnel_key(key_event, state),
            View::Testimonials => Self::handle_carousel_key(key_event),
        }
    }

    fn handle_funnel_key(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Enter => Some(AppEvent::FunnelAdvance),
            KeyCode::PageUp => Some(AppEvent::FunnelRetreat),
            KeyCode::Down => Some(AppEvent::FunnelFocusNext),
            KeyCode::Up | KeyCode::BackTab => Some(AppEvent::FunnelFocusPrevious),
            KeyCode::Right => Some(AppEvent::FunnelNextOption),
            KeyCode::Left => Some(AppEvent::FunnelPreviousOption),
            KeyCode::Backspace => Some(AppEvent::FunnelBackspace),
            KeyCode::Char(' ') if state.focused_kind() == Some(QuestionKind::SingleChoice) => {
                Some(AppEvent::FunnelNextOption)
            }
            KeyCode::Char(c) => Some(AppEvent::FunnelInputChar(c)),
            _ => None,
        }
    }

    fn handle_carousel_key(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::CarouselNext),
            KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::CarouselPrevious),
            KeyCode::Char('p') => Some(AppEvent::CarouselToggleAutoplay),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
                Some(AppEvent::CarouselGoTo(index))
            }
            _ => None,
        }
    }

    /// Translate pointer movement into carousel hover enter/leave
    pub fn handle_mouse_event(mouse_event: MouseEvent, state: &AppState) -> Option<AppEvent> {
        match mouse_event.kind {
            MouseEventKind::Moved => {
                let over = state.pointer_over_carousel(mouse_event.column, mouse_event.row);
                match (over, state.carousel.state().hovered()) {
                    (true, false) => Some(AppEvent::CarouselHoverEnter),
                    (false, true) => Some(AppEvent::CarouselHoverLeave),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// Focus loss and resize leave the pointer position unknown, so any hover ends.
    /// The next `Moved` event over the panel re-enters.
    pub fn handle_terminal_event(event: &Event, state: &AppState) -> Option<AppEvent> {
        match event {
            Event::FocusLost | Event::Resize(_, _) if state.carousel.state().hovered() => {
                Some(AppEvent::CarouselHoverLeave)
            }
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!(?event, "Processing event");
        match event {
            AppEvent::Quit => state.should_quit = true,
            AppEvent::ToggleHelp => state.show_help = !state.show_help,
            AppEvent::SwitchView => {
                state.current_view = state.current_view.toggled();
                if state.current_view == View::Funnel {
                    // The pointer cannot be over a panel that is no longer drawn
                    state.carousel.hover_leave();
                }
            }
            AppEvent::FunnelFocusNext => state.focus_next_question(),
            AppEvent::FunnelFocusPrevious => state.focus_previous_question(),
            AppEvent::FunnelInputChar(c) => state.input_char(c),
            AppEvent::FunnelBackspace => state.backspace(),
            AppEvent::FunnelNextOption => state.cycle_option(1),
            AppEvent::FunnelPreviousOption => state.cycle_option(-1),
            AppEvent::FunnelAdvance => state.advance(),
            AppEvent::FunnelRetreat => state.retreat(),
            AppEvent::FunnelRetry => state.retry(),
            AppEvent::CarouselNext => state.carousel.next(),
            AppEvent::CarouselPrevious => state.carousel.previous(),
            AppEvent::CarouselGoTo(index) => state.carousel.go_to(index),
            AppEvent::CarouselToggleAutoplay => state.carousel.toggle_autoplay(),
            AppEvent::CarouselHoverEnter => state.carousel.hover_enter(),
            AppEvent::CarouselHoverLeave => state.carousel.hover_leave(),
        }
    }
}

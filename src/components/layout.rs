// ABOUTME: Main layout component handling view tabs, the active view, and the bottom menu bar
// Overlays (toast, help) are drawn last so they sit above the body

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const TURQUOISE: Color = Color::Rgb(64, 196, 190);
const GOLD: Color = Color::Rgb(255, 215, 0);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

use super::{HelpComponent, QualificationComponent, TestimonialComponent};
use crate::app::state::{Toast, View};
use crate::app::AppState;

pub struct LayoutComponent {
    funnel: QualificationComponent,
    testimonials: TestimonialComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            funnel: QualificationComponent::new(),
            testimonials: TestimonialComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &mut AppState) {
        let size = frame.size();
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), size);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // View tabs
                Constraint::Min(0),    // Active view
                Constraint::Length(1), // Menu bar
            ])
            .split(size);

        self.render_tabs(frame, chunks[0], state);

        match state.current_view {
            View::Funnel => {
                // The carousel is off screen, so nothing can be hovered
                state.carousel_area = None;
                self.funnel.render(frame, chunks[1], state);
            }
            View::Testimonials => self.testimonials.render(frame, chunks[1], state),
        }

        self.render_menu_bar(frame, chunks[2], state.current_view);

        if let Some(ref toast) = state.toast {
            self.render_toast(frame, size, toast);
        }

        if state.show_help {
            self.help.render(frame, size);
        }
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let current = state.current_view;
        let tab = |label: &str, view: View| {
            if view == current {
                Span::styled(
                    format!(" {label} "),
                    Style::default().fg(DARK_BG).bg(TURQUOISE).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!(" {label} "), Style::default().fg(MUTED_GRAY))
            }
        };

        let line = Line::from(vec![
            Span::styled(" brandmagnet ", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled("│", Style::default().fg(SUBDUED_BORDER)),
            tab(&state.locale.funnel_tab, View::Funnel),
            tab(&state.locale.testimonials_tab, View::Testimonials),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect, current: View) {
        let key = |k: &'static str| Span::styled(k, Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
        let label = |l: &'static str| Span::styled(l, Style::default().fg(MUTED_GRAY));
        let sep = || Span::styled(" │ ", Style::default().fg(SUBDUED_BORDER));

        let mut spans = match current {
            View::Funnel => vec![
                key("Enter"),
                label(" continue "),
                key("Ctrl+B"),
                label(" back "),
                key("↑↓"),
                label(" focus "),
                key("←→"),
                label(" choose "),
                key("Ctrl+R"),
                label(" retry"),
            ],
            View::Testimonials => vec![
                key("←→"),
                label(" browse "),
                key("1-9"),
                label(" jump "),
                key("p"),
                label(" autoplay"),
            ],
        };
        spans.extend([
            sep(),
            key("Tab"),
            label(" switch "),
            key("F1"),
            label(" help "),
            key("Esc"),
            label(" quit"),
        ]);

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(PANEL_BG)),
            area,
        );
    }

    fn render_toast(&self, frame: &mut Frame, area: Rect, toast: &Toast) {
        let width = area.width.min(44);
        let height = area.height.min(5);
        let toast_area = Rect {
            x: area.right().saturating_sub(width + 1),
            y: area.y + 1,
            width,
            height,
        };

        frame.render_widget(Clear, toast_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(TURQUOISE))
            .style(Style::default().bg(PANEL_BG))
            .title(Span::styled(
                format!(" {} ", toast.title),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            ));

        let body = Paragraph::new(Span::styled(toast.body.clone(), Style::default().fg(SOFT_WHITE)))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(body, toast_area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

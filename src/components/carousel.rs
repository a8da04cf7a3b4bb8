// ABOUTME: Testimonial carousel component
// Renders the active quote, its author, position dots, and autoplay status

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::config::UiVariant;

const TURQUOISE: Color = Color::Rgb(64, 196, 190);
const TURQUOISE_LIGHT: Color = Color::Rgb(178, 235, 230);
const BEIGE: Color = Color::Rgb(230, 215, 190);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub struct TestimonialComponent;

impl TestimonialComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the carousel and remember its area for hover hit-testing
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &mut AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Section heading
                Constraint::Min(8),    // Quote panel
                Constraint::Length(2), // Dots and autoplay status
            ])
            .split(area);

        self.render_heading(frame, layout[0], state);
        self.render_quote(frame, layout[1], state);
        self.render_indicators(frame, layout[2], state);

        state.carousel_area = Some(layout[1]);
    }

    fn render_heading(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines = vec![
            Line::from(Span::styled(
                format!(" {} ", state.locale.testimonials_badge),
                Style::default().fg(PANEL_BG).bg(TURQUOISE_LIGHT),
            )),
            Line::from(Span::styled(
                state.locale.testimonials_title.clone(),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_quote(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let testimonial = state.carousel.active();
        let hovered = state.carousel.state().hovered();

        let border_color = if hovered { TURQUOISE_LIGHT } else { TURQUOISE };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let quote = match state.variant {
            UiVariant::Baseline => testimonial.content.clone(),
            UiVariant::Polished => format!("“{}”", testimonial.content),
        };

        let mut lines = Vec::new();
        if state.variant == UiVariant::Polished {
            lines.push(Line::from(Span::styled("❝", Style::default().fg(BEIGE))));
        }
        lines.extend([
            Line::from(""),
            Line::from(Span::styled(
                quote,
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                testimonial.author.clone(),
                Style::default().fg(TURQUOISE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(testimonial.byline(), Style::default().fg(MUTED_GRAY))),
        ]);

        let content = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(content, inner.inner(&ratatui::layout::Margin::new(3, 1)));
    }

    fn render_indicators(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let carousel = state.carousel.state();
        let mut dots = Vec::with_capacity(carousel.item_count() * 2);
        for idx in 0..carousel.item_count() {
            if idx > 0 {
                dots.push(Span::raw(" "));
            }
            if idx == carousel.active_index() {
                dots.push(Span::styled("●", Style::default().fg(TURQUOISE)));
            } else {
                dots.push(Span::styled("○", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let locale = &state.locale;
        let status = if !carousel.autoplay_enabled() {
            Span::styled(locale.autoplay_off.clone(), Style::default().fg(MUTED_GRAY))
        } else if carousel.hovered() {
            Span::styled(locale.autoplay_paused.clone(), Style::default().fg(BEIGE))
        } else {
            Span::styled(locale.autoplay_running.clone(), Style::default().fg(TURQUOISE_LIGHT))
        };

        let lines = vec![Line::from(dots), Line::from(status)];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

impl Default for TestimonialComponent {
    fn default() -> Self {
        Self::new()
    }
}

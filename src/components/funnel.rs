// ABOUTME: Qualification funnel component
// Renders step progress, the current step's questions, and the Back/Continue controls

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::config::UiVariant;
use crate::funnel::SubmissionStatus;
use crate::models::{Question, QuestionKind};

const TURQUOISE: Color = Color::Rgb(64, 196, 190);
const TURQUOISE_LIGHT: Color = Color::Rgb(178, 235, 230);
const BEIGE: Color = Color::Rgb(230, 215, 190);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

pub struct QualificationComponent;

impl QualificationComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header with progress
                Constraint::Min(10),   // Step content
                Constraint::Length(4), // Controls
            ])
            .split(area);

        self.render_header(frame, layout[0], state);

        if state.wizard.status() == &SubmissionStatus::Complete {
            self.render_complete(frame, layout[1].union(layout[2]), state);
            return;
        }

        self.render_step(frame, layout[1], state);
        self.render_controls(frame, layout[2], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                format!(" {} ", state.locale.funnel_badge),
                Style::default().fg(PANEL_BG).bg(TURQUOISE_LIGHT),
            )),
            Line::from(Span::styled(
                state.locale.funnel_title.clone(),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
        ];
        lines.push(self.progress_line(state));

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }

    /// Done / current / pending markers for every step
    fn progress_line(&self, state: &AppState) -> Line<'static> {
        let current = state.wizard.current_index();
        let complete = state.wizard.status() == &SubmissionStatus::Complete;
        let steps = state.wizard.steps();
        let mut spans = Vec::new();

        for (idx, step) in steps.iter().enumerate() {
            let done = idx < current || complete;
            let (marker, style) = if done {
                ("✔".to_string(), Style::default().fg(TURQUOISE))
            } else if idx == current {
                (
                    step.icon.glyph().to_string(),
                    Style::default().fg(TURQUOISE_LIGHT).add_modifier(Modifier::BOLD),
                )
            } else {
                (step.icon.glyph().to_string(), Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(marker, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                step.title.clone(),
                if idx == current && !complete {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < steps.len() - 1 {
                let connector = match state.variant {
                    UiVariant::Baseline => "  ",
                    UiVariant::Polished => " ━━━ ",
                };
                let color = if done { TURQUOISE } else { BEIGE };
                spans.push(Span::styled(connector, Style::default().fg(color)));
            }
        }

        Line::from(spans)
    }

    fn render_step(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let step = state.wizard.current_step();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(TURQUOISE))
            .style(Style::default().bg(PANEL_BG))
            .title(Span::styled(
                format!(" {} ", step.title),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(step.subtitle.clone(), Style::default().fg(MUTED_GRAY))),
            Line::from(""),
        ];

        for (idx, question) in step.questions.iter().enumerate() {
            let focused = idx == state.focused_question;
            lines.extend(self.question_lines(question, focused, state));
            lines.push(Line::from(""));
        }

        if let SubmissionStatus::Failed { reason } = state.wizard.status() {
            lines.push(Line::from(Span::styled(
                state.locale.failed_title.clone(),
                Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(reason.clone(), Style::default().fg(ERROR_RED))));
            lines.push(Line::from(Span::styled(
                state.locale.retry_hint.clone(),
                Style::default().fg(BEIGE),
            )));
        }

        let content = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(content, inner.inner(&ratatui::layout::Margin::new(2, 1)));
    }

    fn question_lines(&self, question: &Question, focused: bool, state: &AppState) -> Vec<Line<'static>> {
        let pointer = if focused { "▸ " } else { "  " };
        let prompt_style = if focused {
            Style::default().fg(TURQUOISE_LIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SOFT_WHITE)
        };
        let mut lines = vec![Line::from(vec![
            Span::styled(pointer, Style::default().fg(TURQUOISE)),
            Span::styled(question.prompt.clone(), prompt_style),
        ])];

        let answer = state.wizard.answers().get(&question.id);
        match question.kind {
            QuestionKind::FreeText => {
                let (text, style) = match answer {
                    Some(value) if !value.is_empty() => (value.to_string(), Style::default().fg(SOFT_WHITE)),
                    _ => (state.locale.answer_placeholder.clone(), Style::default().fg(MUTED_GRAY)),
                };
                let mut spans = vec![Span::raw("    "), Span::styled(text, style)];
                if focused && state.wizard.status().is_idle() {
                    spans.push(Span::styled("█", Style::default().fg(TURQUOISE)));
                }
                lines.push(Line::from(spans));
            }
            QuestionKind::SingleChoice => {
                let mut spans = vec![Span::raw("    ")];
                for option in &question.options {
                    let selected = answer == Some(option.value.as_str());
                    let (mark, style) = if selected {
                        ("(●) ", Style::default().fg(TURQUOISE).add_modifier(Modifier::BOLD))
                    } else {
                        ("( ) ", Style::default().fg(MUTED_GRAY))
                    };
                    spans.push(Span::styled(mark, style));
                    spans.push(Span::styled(
                        format!("{}   ", option.label),
                        if selected { Style::default().fg(SOFT_WHITE) } else { Style::default().fg(MUTED_GRAY) },
                    ));
                }
                lines.push(Line::from(spans));
            }
        }

        lines
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let status = state.wizard.status();
        let back_enabled = status.is_idle() && state.wizard.current_index() > 0;
        let advance_enabled = status.is_idle() && state.wizard.can_advance();

        let advance_label = match status {
            SubmissionStatus::Submitting => format!("⟳ {}", state.locale.processing_label),
            _ if state.wizard.is_last_step() => format!("{} ›", state.locale.submit_label),
            _ => format!("{} ›", state.locale.continue_label),
        };

        let button = |label: String, enabled: bool, primary: bool| {
            let style = match (enabled, primary) {
                (true, true) => Style::default().fg(PANEL_BG).bg(TURQUOISE).add_modifier(Modifier::BOLD),
                (true, false) => Style::default().fg(TURQUOISE_LIGHT),
                (false, _) => Style::default().fg(SUBDUED_BORDER),
            };
            Span::styled(format!("[ {label} ]"), style)
        };

        let (position, total) = state.wizard.progress();
        let mut lines = vec![Line::from(vec![
            button(format!("‹ {}", state.locale.back_label), back_enabled, false),
            Span::styled(format!("   {position}/{total}   "), Style::default().fg(MUTED_GRAY)),
            button(advance_label, advance_enabled, true),
        ])];

        if let Some(ref notice) = state.notice {
            lines.push(Line::from(Span::styled(notice.clone(), Style::default().fg(BEIGE))));
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }

    fn render_complete(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(TURQUOISE))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled("✔", Style::default().fg(TURQUOISE).add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(Span::styled(
                state.locale.complete_title.clone(),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(state.locale.complete_body.clone(), Style::default().fg(MUTED_GRAY))),
        ];

        if let Some(ack) = state.wizard.acknowledgement() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("{} {}", state.locale.reference_label, ack.lead_id),
                Style::default().fg(SUBDUED_BORDER),
            )));
        }

        let content = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(content, inner);
    }
}

impl Default for QualificationComponent {
    fn default() -> Self {
        Self::new()
    }
}

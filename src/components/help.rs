// ABOUTME: Help overlay component displaying keyboard shortcuts for both views

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem},
};

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Funnel:").style(heading),
            ListItem::new("  ↑/↓        Focus question"),
            ListItem::new("  ←/→/Space  Choose option"),
            ListItem::new("  type       Edit answer"),
            ListItem::new("  Enter      Continue / Submit"),
            ListItem::new("  Ctrl+B     Back (also PageUp)"),
            ListItem::new("  Ctrl+R     Retry failed submission"),
            ListItem::new(""),
            ListItem::new("Testimonials:").style(heading),
            ListItem::new("  h/←        Previous testimonial"),
            ListItem::new("  l/→        Next testimonial"),
            ListItem::new("  1-9        Jump to testimonial"),
            ListItem::new("  p          Toggle autoplay"),
            ListItem::new("  mouse      Hover to pause autoplay"),
            ListItem::new(""),
            ListItem::new("General:").style(heading),
            ListItem::new("  Tab        Switch view"),
            ListItem::new("  F1         Toggle this help (also ? on testimonials)"),
            ListItem::new("  Esc        Quit application (also q on testimonials)"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items).block(
            Block::default()
                .title("Help - Press F1 or Esc to close")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help_list, popup_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Rectangle of the given percentages of `r`, centered in it
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

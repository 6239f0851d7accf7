// ABOUTME: Help overlay listing the demo's key bindings

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
    style::{Color, Modifier, Style},
};

const BINDINGS: &[(&str, &str)] = &[
    ("Space x4", "Raise a warning (hides after 3s)"),
    ("Space", "Dismiss the warning early"),
    ("?", "Toggle this help"),
    ("q/Esc", "Quit"),
    ("Ctrl+C", "Force quit"),
];

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {key:<10}"),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*action),
                ])
            })
            .collect();

        // Borders take one row and column on each side.
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
        let popup_area = Self::popup(area, 50, height);

        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .title("Keys - ? or Esc to close")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            ),
            popup_area,
        );
    }

    /// Centers a `width` x `height` box inside `area`, shrinking it to fit.
    fn popup(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}

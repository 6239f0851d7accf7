// ABOUTME: Main layout component placing the toast stack above a status and menu bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Style},
};

use crate::app::AppState;
use crate::notifications::NotificationManager;
use crate::container::MarkupContainer;
use super::{HelpComponent, ToastStackComponent};

pub struct LayoutComponent {
    toast_stack: ToastStackComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            toast_stack: ToastStackComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),     // Toast area
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Bottom menu bar
            ])
            .split(frame.size());

        let manager = &state.manager;
        self.toast_stack.render(
            frame,
            main_chunks[0],
            manager.container(),
            manager.is_container_visible(),
        );

        self.render_status(frame, main_chunks[1], manager, state.space_presses);
        self.render_menu_bar(frame, main_chunks[2]);

        if state.help_visible {
            self.help.render(frame, frame.size());
        }
    }

    fn render_status(
        &self,
        frame: &mut Frame,
        area: Rect,
        manager: &NotificationManager<MarkupContainer>,
        presses: u32,
    ) {
        let status_text = format!(
            "active: {}  next id: {}  container: {}  space presses: {}",
            manager.active_count(),
            manager.next_id(),
            manager.container().classes().join(" "),
            presses,
        );

        let status = Paragraph::new(status_text)
            .block(Block::default().borders(Borders::ALL).title(format!("#{}", manager.container().id())))
            .style(Style::default().fg(Color::White));

        frame.render_widget(status, area);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let menu_text = "[space] x4 warning  [?]help  [q]uit";

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

// ABOUTME: Renders the notification container as a stack of bordered toasts
// Each inserted element becomes one block, styled by its extra class

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::container::{Element, MarkupContainer};

const TOAST_HEIGHT: u16 = 3;
const TOAST_WIDTH: u16 = 40;

pub struct ToastStackComponent;

impl ToastStackComponent {
    pub fn new() -> Self {
        Self
    }

    /// Draws toasts top-right, newest at the bottom of the stack.
    pub fn render(&self, frame: &mut Frame, area: Rect, container: &MarkupContainer, visible: bool) {
        if !visible {
            return;
        }

        let width = TOAST_WIDTH.min(area.width);
        let x = area.x + area.width.saturating_sub(width);
        let mut y = area.y;

        for element in container.children() {
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }
            let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);
            frame.render_widget(Clear, toast_area);
            frame.render_widget(Self::toast(element), toast_area);
            y += TOAST_HEIGHT;
        }
    }

    fn toast(element: &Element) -> Paragraph<'_> {
        let color = Self::accent(element);
        Paragraph::new(element.body.as_str())
            .block(
                Block::default()
                    .title(element.name.as_str())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
    }

    fn accent(element: &Element) -> Color {
        if element.has_class("warning") {
            Color::Yellow
        } else if element.has_class("error") || element.has_class("red") {
            Color::Red
        } else if element.has_class("success") || element.has_class("green") {
            Color::Green
        } else {
            Color::Cyan
        }
    }
}

impl Default for ToastStackComponent {
    fn default() -> Self {
        Self::new()
    }
}

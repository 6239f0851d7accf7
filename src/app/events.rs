// ABOUTME: Event handling system mapping keyboard input to demo actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    Space,
    ToggleHelp,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char(' ') => Some(AppEvent::Space),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.should_quit = true,
            AppEvent::Space => state.on_space(),
            AppEvent::ToggleHelp => state.help_visible = !state.help_visible,
        }
    }
}

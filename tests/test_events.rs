// ABOUTME: Tests for demo key handling mapping space presses onto notifications

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use toast_stack::app::state::{WARNING_TEXT, WELCOME_TEXT};
use toast_stack::app::{App, AppEvent, AppState, EventHandler};

fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(state: &mut AppState, code: KeyCode) {
    if let Some(event) = EventHandler::handle_key_event(create_key_event(code), state) {
        EventHandler::process_event(event, state);
    }
}

fn bodies(state: &AppState) -> Vec<String> {
    state
        .manager
        .container()
        .children()
        .iter()
        .map(|e| e.body.clone())
        .collect()
}

#[test]
fn test_quit_key_events() {
    let mut state = AppState::default();

    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Char('q')), &mut state),
        Some(AppEvent::Quit)
    );
    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Esc), &mut state),
        Some(AppEvent::Quit)
    );
    assert_eq!(
        EventHandler::handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut state
        ),
        Some(AppEvent::Quit)
    );
}

#[test]
fn test_help_swallows_other_keys() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('?'));
    assert!(state.help_visible);

    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Char(' ')), &mut state),
        None
    );
    press(&mut state, KeyCode::Esc);
    assert!(!state.help_visible);
    assert!(!state.should_quit);
}

#[tokio::test]
async fn test_init_shows_welcome() {
    let mut app = App::new(Default::default());
    app.init();

    assert_eq!(bodies(&app.state), vec![WELCOME_TEXT.to_string()]);
    assert!(app.state.manager.is_container_visible());
}

#[tokio::test]
async fn test_fourth_space_raises_warning() {
    let mut state = AppState::default();

    for _ in 0..3 {
        press(&mut state, KeyCode::Char(' '));
    }
    assert!(bodies(&state).is_empty());
    assert_eq!(state.space_presses, 3);

    press(&mut state, KeyCode::Char(' '));
    assert_eq!(bodies(&state), vec![WARNING_TEXT.to_string()]);
    assert!(state.warning_visible());
    assert_eq!(state.space_presses, 0);

    let element = &state.manager.container().children()[0];
    assert!(element.has_class("warning"));
}

#[tokio::test]
async fn test_next_space_dismisses_visible_warning() {
    let mut state = AppState::default();
    for _ in 0..4 {
        press(&mut state, KeyCode::Char(' '));
    }
    assert!(state.warning_visible());

    press(&mut state, KeyCode::Char(' '));
    assert!(!state.warning_visible());
    assert!(bodies(&state).is_empty());
    assert_eq!(state.space_presses, 0);
}

#[test]
fn test_first_space_without_warning_only_counts() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char(' '));

    assert_eq!(state.space_presses, 1);
    assert!(state.warning.is_none());
}

#[test]
fn test_other_keys_are_ignored() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('x'));
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.space_presses, 0);
    assert!(!state.should_quit);
}

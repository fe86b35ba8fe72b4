//! Keyboard handling for the menu, parameters and play screens.
//!
//! Key events are first mapped to UI-agnostic inputs, then applied to the
//! screen state.

use crate::core::config::SessionParams;
use crate::ui::menu_scene::{MenuItem, MenuScreen};
use crate::ui::params_scene::ParamsScreen;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input events for the idle menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Select,
    Quit,
    Other,
}

/// Input events for the parameters screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsInput {
    Up,
    Down,
    Increase,
    Decrease,
    Reset,
    Save,
    Cancel,
    Other,
}

/// Input events while a round is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayInput {
    Jump,
    Quit,
    Other,
}

/// What the menu wants the main loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Play,
    OpenParameters,
    Quit,
}

/// What the parameters screen wants the main loop to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamsAction {
    None,
    Save(SessionParams),
    Cancel,
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Key releases and repeats reported by some terminals are ignored.
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

pub fn map_menu_key(key: KeyEvent) -> MenuInput {
    if is_ctrl_c(&key) {
        return MenuInput::Quit;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => MenuInput::Up,
        KeyCode::Down | KeyCode::Char('j') => MenuInput::Down,
        KeyCode::Enter | KeyCode::Char(' ') => MenuInput::Select,
        KeyCode::Char('q') | KeyCode::Esc => MenuInput::Quit,
        _ => MenuInput::Other,
    }
}

pub fn map_params_key(key: KeyEvent) -> ParamsInput {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => ParamsInput::Up,
        KeyCode::Down | KeyCode::Char('j') => ParamsInput::Down,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => ParamsInput::Increase,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => ParamsInput::Decrease,
        KeyCode::Char('r') => ParamsInput::Reset,
        KeyCode::Enter => ParamsInput::Save,
        KeyCode::Esc => ParamsInput::Cancel,
        _ => ParamsInput::Other,
    }
}

pub fn map_play_key(key: KeyEvent) -> PlayInput {
    if is_ctrl_c(&key) {
        return PlayInput::Quit;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('w') => PlayInput::Jump,
        KeyCode::Char('q') => PlayInput::Quit,
        _ => PlayInput::Other,
    }
}

pub fn process_menu_input(screen: &mut MenuScreen, input: MenuInput) -> MenuAction {
    let count = MenuItem::ALL.len();
    match input {
        MenuInput::Up => {
            screen.selected_index = (screen.selected_index + count - 1) % count;
            MenuAction::None
        }
        MenuInput::Down => {
            screen.selected_index = (screen.selected_index + 1) % count;
            MenuAction::None
        }
        MenuInput::Select => match screen.selected() {
            MenuItem::Play => MenuAction::Play,
            MenuItem::Parameters => MenuAction::OpenParameters,
            MenuItem::Quit => MenuAction::Quit,
        },
        MenuInput::Quit => MenuAction::Quit,
        MenuInput::Other => MenuAction::None,
    }
}

/// Adjustment applied per key press: a tenth of the field's default
/// magnitude, so every field moves in sensible increments.
pub fn step_for(index: usize) -> f64 {
    SessionParams::default()
        .fields()
        .get(index)
        .map_or(0.0, |(_, value)| value.abs() * 0.1)
}

pub fn process_params_input(screen: &mut ParamsScreen, input: ParamsInput) -> ParamsAction {
    let count = screen.draft.fields().len();
    match input {
        ParamsInput::Up => {
            screen.selected_index = screen.selected_index.saturating_sub(1);
        }
        ParamsInput::Down => {
            screen.selected_index = (screen.selected_index + 1).min(count - 1);
        }
        ParamsInput::Increase | ParamsInput::Decrease => {
            let step = step_for(screen.selected_index);
            let delta = if input == ParamsInput::Increase { step } else { -step };
            if let Some(field) = screen.draft.field_mut(screen.selected_index) {
                *field += delta;
            }
            screen.validation_error = None;
        }
        ParamsInput::Reset => {
            screen.draft = SessionParams::default();
            screen.validation_error = None;
        }
        ParamsInput::Save => match screen.draft.validate() {
            Ok(()) => return ParamsAction::Save(screen.draft.clone()),
            Err(e) => screen.validation_error = Some(e.to_string()),
        },
        ParamsInput::Cancel => return ParamsAction::Cancel,
        ParamsInput::Other => {}
    }
    ParamsAction::None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_play_keys() {
        assert_eq!(map_play_key(key(KeyCode::Char(' '))), PlayInput::Jump);
        assert_eq!(map_play_key(key(KeyCode::Up)), PlayInput::Jump);
        assert_eq!(map_play_key(key(KeyCode::Char('q'))), PlayInput::Quit);
        assert_eq!(
            map_play_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            PlayInput::Quit
        );
        assert_eq!(map_play_key(key(KeyCode::Char('x'))), PlayInput::Other);
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut screen = MenuScreen::new();
        assert_eq!(process_menu_input(&mut screen, MenuInput::Up), MenuAction::None);
        assert_eq!(screen.selected(), MenuItem::Quit);
        process_menu_input(&mut screen, MenuInput::Down);
        assert_eq!(screen.selected(), MenuItem::Play);
    }

    #[test]
    fn test_menu_select() {
        let mut screen = MenuScreen::new();
        assert_eq!(process_menu_input(&mut screen, MenuInput::Select), MenuAction::Play);
        process_menu_input(&mut screen, MenuInput::Down);
        assert_eq!(
            process_menu_input(&mut screen, MenuInput::Select),
            MenuAction::OpenParameters
        );
    }

    #[test]
    fn test_params_adjust_and_save() {
        let mut screen = ParamsScreen::new(&SessionParams::default());
        process_params_input(&mut screen, ParamsInput::Increase);
        let expected = SessionParams::default().gravity * 1.1;
        assert!((screen.draft.gravity - expected).abs() < 1e-12);

        match process_params_input(&mut screen, ParamsInput::Save) {
            ParamsAction::Save(params) => assert!((params.gravity - expected).abs() < 1e-12),
            other => panic!("expected save, got {:?}", other),
        }
    }

    #[test]
    fn test_params_invalid_save_shows_error() {
        let mut screen = ParamsScreen::new(&SessionParams::default());
        // jump_impulse below zero
        process_params_input(&mut screen, ParamsInput::Down);
        for _ in 0..11 {
            process_params_input(&mut screen, ParamsInput::Decrease);
        }
        assert_eq!(process_params_input(&mut screen, ParamsInput::Save), ParamsAction::None);
        assert!(screen.validation_error.is_some());

        process_params_input(&mut screen, ParamsInput::Reset);
        assert_eq!(screen.draft, SessionParams::default());
        assert!(screen.validation_error.is_none());
    }

    #[test]
    fn test_params_cursor_stays_in_range() {
        let mut screen = ParamsScreen::new(&SessionParams::default());
        process_params_input(&mut screen, ParamsInput::Up);
        assert_eq!(screen.selected_index, 0);
        for _ in 0..50 {
            process_params_input(&mut screen, ParamsInput::Down);
        }
        assert_eq!(screen.selected_index, screen.draft.fields().len() - 1);
    }
}

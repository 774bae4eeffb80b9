//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::Input;

/// Maps a key press to a state machine input.
pub fn map_key(key: KeyEvent) -> Input {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Input::Quit,
            _ => Input::Ignore,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') => Input::PrevTab,
        KeyCode::Right | KeyCode::Char('d') => Input::NextTab,
        KeyCode::Char('h') => Input::ToggleHelp,
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        _ => Input::Ignore,
    }
}

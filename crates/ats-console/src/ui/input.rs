use super::*;

use crossterm::event::{KeyCode, KeyModifiers};

pub(super) fn handle_key(
    key: KeyEvent,
    state: &mut UiState,
    sink: &mut dyn CommandSink,
    no_input: bool,
) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if !state.dashboard.authenticated {
        return handle_login_key(key, state);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('l') | KeyCode::Char('L') => {
            let language = state.dashboard.language.toggled();
            state.dashboard.set_language(language);
            false
        }
        KeyCode::Char('g') | KeyCode::Char('G') if !no_input => {
            state.dashboard.toggle_generator(sink, Instant::now());
            false
        }
        _ => false,
    }
}

fn handle_login_key(key: KeyEvent, state: &mut UiState) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            state.login.next_field();
            false
        }
        KeyCode::Enter => {
            let username = state.login.username.clone();
            let password = state.login.password.clone();
            if state.dashboard.login(&username, &password, Instant::now()) {
                state.login.password.clear();
            }
            false
        }
        KeyCode::Backspace => {
            state.login.focused_input().pop();
            false
        }
        KeyCode::Char(ch) => {
            state.login.focused_input().push(ch);
            false
        }
        _ => false,
    }
}

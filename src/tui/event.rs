use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Status;

use super::app::{App, Mode};

/// What the event loop should do after a key press. Movement and text entry
/// mutate the app directly; anything touching the store comes back as a
/// variant for the loop to dispatch.
pub enum KeyAction {
    Quit,
    Submit,
    SetStatus(Status),
    Delete,
    ToggleWindow,
    Continue,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> KeyAction {
    match app.mode {
        Mode::Normal => handle_normal_key(app, key),
        Mode::AddTask | Mode::EditNotes => handle_input_key(app, key),
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
            KeyAction::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            KeyAction::Continue
        }
        KeyCode::Char('a') => {
            app.enter_add_mode();
            KeyAction::Continue
        }
        KeyCode::Char('n') => {
            app.enter_notes_mode();
            KeyAction::Continue
        }
        KeyCode::Char('1') => KeyAction::SetStatus(Status::NotStarted),
        KeyCode::Char('2') => KeyAction::SetStatus(Status::InProgress),
        KeyCode::Char('3') => KeyAction::SetStatus(Status::Completed),
        KeyCode::Char('d') => KeyAction::Delete,
        KeyCode::Char('v') => KeyAction::ToggleWindow,
        _ => KeyAction::Continue,
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            app.cancel_input();
            KeyAction::Continue
        }
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => {
            app.input.pop();
            KeyAction::Continue
        }
        KeyCode::Char(c) => {
            app.input.push(c);
            KeyAction::Continue
        }
        _ => KeyAction::Continue,
    }
}

//! Mode-specific key handling
//!
//! Structural keys (Tab, Shift+Tab, Enter, Esc) are handled first and mean
//! the same thing everywhere. While a form input has focus, printable keys
//! are typed into it; everything else goes through the configured bindings.

mod mouse;

pub use mouse::handle_mouse_event;

use crate::app::{App, Mode, TextInput};
use crate::config::Action;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Handle a key event based on the current mode
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // Ctrl+c always quits, even from inside an input.
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.mode() {
        Mode::Help => app.toggle_help(),
        Mode::ProjectModal(_) => handle_modal_key(app, code, modifiers),
        Mode::LoadFailed(_) => handle_bound_key(app, code, modifiers),
        Mode::Page => handle_page_key(app, code, modifiers),
    }
}

fn handle_modal_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => app.modal_focus_prev(),
        KeyCode::Tab => app.modal_focus_next(),
        KeyCode::BackTab => app.modal_focus_prev(),
        KeyCode::Enter => app.activate_modal(),
        KeyCode::Esc => app.close_modal(),
        // The page behind the modal stays put; only quit gets through.
        _ => {
            if app.config.keys.get_action(code, modifiers) == Some(Action::Quit) {
                app.quit();
            }
        }
    }
}

fn handle_page_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => app.focus_prev(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter if modifiers.contains(KeyModifiers::ALT) => app.type_char('\n'),
        KeyCode::Enter => app.activate(),
        KeyCode::Esc => app.blur(),
        _ if app.is_editing() => {
            if !handle_text_key(app, code, modifiers) {
                handle_bound_key(app, code, modifiers);
            }
        }
        _ => handle_bound_key(app, code, modifiers),
    }
}

/// Edit the focused input. Returns false when the key is not an editing key.
fn handle_text_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Char('u' | 'U') if ctrl => app.edit_field(TextInput::clear),
        KeyCode::Char('w' | 'W') if ctrl => app.edit_field(TextInput::delete_word),
        KeyCode::Char(_) if ctrl || modifiers.contains(KeyModifiers::ALT) => return false,
        KeyCode::Char(c) => app.type_char(c),
        KeyCode::Backspace => app.edit_field(TextInput::backspace),
        KeyCode::Delete => app.edit_field(TextInput::delete),
        KeyCode::Left => app.edit_field(TextInput::cursor_left),
        KeyCode::Right => app.edit_field(TextInput::cursor_right),
        KeyCode::Home => app.edit_field(TextInput::cursor_home),
        KeyCode::End => app.edit_field(TextInput::cursor_end),
        _ => return false,
    }
    true
}

fn handle_bound_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if let Some(action) = app.config.keys.get_action(code, modifiers) {
        app.handle_action(action);
    }
}

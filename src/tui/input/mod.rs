mod confirm;
mod edit;
mod mouse;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use super::app::{App, Focus};

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use mouse::*;
#[allow(unused_imports)]
use navigate::*;

/// Handle a key event for whatever currently has input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // An open dialog is modal
    if app.dialog.is_some() {
        handle_dialog(app, key);
    } else {
        match app.focus {
            Focus::List => handle_navigate(app, key),
            Focus::AddInput => handle_add_input(app, key),
            Focus::Row(id) => handle_row_edit(app, id, key),
        }
    }
    app.after_event();
}

/// Handle a mouse event (left click only)
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    handle_click(app, mouse);
    app.after_event();
}

/// Handle a bracketed paste. Goes to the focused field, if any.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.dialog.is_some() {
        return;
    }
    match app.focus {
        Focus::AddInput => {
            app.add_input.insert_str(text);
        }
        Focus::Row(id) => {
            if let Some(row) = app.rows.get_mut(&id) {
                row.paste(text);
            }
        }
        Focus::List => {}
    }
}

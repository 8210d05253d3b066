use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Focus};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => move_cursor(app, 1),
        (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => move_cursor(app, -1),
        (_, KeyCode::Home) | (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
        }
        (_, KeyCode::End | KeyCode::Char('G')) => {
            app.cursor = app.rows.len().saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            if let Some(id) = app.cursor_task_id() {
                app.toggle_task(id);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('e') | KeyCode::Enter) => {
            if let Some(id) = app.cursor_task_id() {
                app.start_edit(id);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Delete) => {
            if let Some(id) = app.cursor_task_id() {
                app.request_delete(id);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab) => {
            app.set_focus(Focus::AddInput);
        }
        _ => {}
    }
}

pub(super) fn move_cursor(app: &mut App, delta: i32) {
    let len = app.rows.len();
    if len == 0 {
        return;
    }
    let next = (app.cursor as i64 + delta as i64).clamp(0, len as i64 - 1);
    app.cursor = next as usize;
}

use crossterm::event::{KeyCode, KeyEvent};

use crate::model::task::TaskId;
use crate::tui::app::{App, Focus};
use crate::tui::text_input::InputOutcome;

/// Keys for the "add a new task" field
pub(super) fn handle_add_input(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.set_focus(Focus::List);
        return;
    }
    match app.add_input.handle_key(key) {
        InputOutcome::Submit => app.submit_new_task(),
        InputOutcome::Cancel => app.set_focus(Focus::List),
        InputOutcome::Changed | InputOutcome::Moved | InputOutcome::Ignored => {}
    }
}

/// Keys for a row in the middle of a rename
pub(super) fn handle_row_edit(app: &mut App, id: TaskId, key: KeyEvent) {
    let Some(row) = app.rows.get_mut(&id) else {
        app.set_focus(Focus::List);
        return;
    };
    match row.input(key) {
        InputOutcome::Submit => app.commit_edit(id),
        InputOutcome::Cancel => app.cancel_edit(id),
        InputOutcome::Changed | InputOutcome::Moved | InputOutcome::Ignored => {}
    }
}

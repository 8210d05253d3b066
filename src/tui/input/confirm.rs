use crossterm::event::KeyEvent;

use crate::tui::app::App;
use crate::tui::dialog::DialogOutcome;

pub(super) fn handle_dialog(app: &mut App, key: KeyEvent) {
    let Some(dialog) = app.dialog.as_mut() else {
        return;
    };
    if let DialogOutcome::Closed(action) = dialog.handle_key(key) {
        app.run_dialog_action(action);
    }
}

/// Mouse activation of a dialog option
pub(super) fn choose_dialog_option(app: &mut App, index: usize) {
    let outcome = app.dialog.as_ref().and_then(|d| d.choose(index));
    if let Some(DialogOutcome::Closed(action)) = outcome {
        app.run_dialog_action(action);
    }
}

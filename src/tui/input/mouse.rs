use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::{App, Focus, HitTarget};

use super::*;

/// Left click on whatever the last frame drew under the pointer
pub(super) fn handle_click(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(target) = app.hit_test(mouse.column, mouse.row) else {
        return;
    };

    // Dialogs are modal: only their own options respond
    if app.dialog.is_some() {
        if let HitTarget::DialogOption(index) = target {
            choose_dialog_option(app, index);
        }
        return;
    }

    app.status_message = None;
    match target {
        HitTarget::AddInput => app.set_focus(Focus::AddInput),
        HitTarget::AddButton => app.submit_new_task(),
        HitTarget::Toggle(id) => app.toggle_task(id),
        HitTarget::Edit(id) => app.start_edit(id),
        HitTarget::CancelEdit(id) => app.cancel_edit(id),
        HitTarget::Delete(id) => app.request_delete(id),
        HitTarget::DialogOption(_) => {}
    }
}

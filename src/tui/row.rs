use crossterm::event::KeyEvent;
use tracing::debug;

use crate::model::task::{Task, TaskId};
use crate::ops::store::TaskStore;

use super::dialog::Dialog;
use super::text_input::{InputOutcome, TextInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Viewing,
    Editing,
}

/// Focus side effect produced by a committed mode transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    Acquire(TaskId),
    Release(TaskId),
}

/// Inline rename state for one row. Focus follows the mode as an effect:
/// [`RowController::sync_focus`] runs after the transition is committed.
#[derive(Debug, Clone)]
pub struct RowController {
    task_id: TaskId,
    mode: RowMode,
    field: TextInput,
    /// The mode the last focus effect ran for
    effect_mode: RowMode,
}

impl RowController {
    pub fn new(task: &Task) -> Self {
        let mut field = TextInput::new(&task.title);
        field.set_editable(false);
        RowController {
            task_id: task.id,
            mode: RowMode::Viewing,
            field,
            effect_mode: RowMode::Viewing,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    pub fn field(&self) -> &TextInput {
        &self.field
    }

    /// The working copy of the title
    pub fn buffer(&self) -> &str {
        self.field.value()
    }

    /// viewing → editing, buffer seeded from the current title
    pub fn start_edit(&mut self, task: &Task) {
        if self.mode != RowMode::Viewing {
            return;
        }
        self.mode = RowMode::Editing;
        self.field.set_value(&task.title);
        self.field.set_editable(true);
    }

    /// editing → viewing, dropping whatever was typed
    pub fn cancel(&mut self, task: &Task) {
        if self.mode != RowMode::Editing {
            return;
        }
        self.field.set_value(&task.title);
        self.leave_editing();
    }

    /// editing → viewing, handing the buffer to the store first
    pub fn commit(&mut self, store: &mut TaskStore) {
        if self.mode != RowMode::Editing {
            return;
        }
        store.edit_task(self.task_id, self.field.value());
        self.leave_editing();
    }

    fn leave_editing(&mut self) {
        self.mode = RowMode::Viewing;
        self.field.set_editable(false);
    }

    /// Feed a key to the field. Read-only while viewing.
    pub fn input(&mut self, key: KeyEvent) -> InputOutcome {
        if self.mode != RowMode::Editing {
            return InputOutcome::Ignored;
        }
        self.field.handle_key(key)
    }

    pub fn paste(&mut self, text: &str) -> InputOutcome {
        if self.mode != RowMode::Editing {
            return InputOutcome::Ignored;
        }
        self.field.insert_str(text)
    }

    /// Deleting is off while a rename is in progress
    pub fn can_delete(&self) -> bool {
        self.mode == RowMode::Viewing
    }

    /// The confirmation prompt for deleting this row's task
    pub fn request_delete(&self) -> Option<Dialog> {
        if !self.can_delete() {
            return None;
        }
        Some(Dialog::remove_task(self.task_id))
    }

    /// Run the focus effect for the last committed transition, if it has
    /// not run yet: entering editing focuses the field, leaving it blurs.
    pub fn sync_focus(&mut self) -> Option<FocusChange> {
        if self.effect_mode == self.mode {
            return None;
        }
        self.effect_mode = self.mode;
        let change = match self.mode {
            RowMode::Editing => {
                self.field.focus();
                FocusChange::Acquire(self.task_id)
            }
            RowMode::Viewing => {
                self.field.blur();
                FocusChange::Release(self.task_id)
            }
        };
        debug!(task = %self.task_id, ?change, "row focus");
        Some(change)
    }

    /// Another field took focus from this row
    pub fn blur_field(&mut self) {
        self.field.blur();
    }

    /// Give focus back to a row that is still editing
    pub fn focus_field(&mut self) {
        if self.mode == RowMode::Editing {
            self.field.focus();
        }
    }

    /// Follow a new snapshot of the same task. An edit in progress keeps
    /// its buffer.
    pub fn reset_to(&mut self, task: &Task) {
        if self.mode == RowMode::Viewing && self.field.value() != task.title {
            self.field.set_value(&task.title);
        }
    }
}

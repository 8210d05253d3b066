use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::task::TaskId;

/// What choosing a dialog option does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    RemoveTask(TaskId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogOption {
    pub label: String,
    pub action: Option<DialogAction>,
}

/// Result of feeding a key to an open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Still open
    Open,
    /// Closed; run the action if there is one
    Closed(Option<DialogAction>),
}

/// A modal prompt: title, message and one or two labeled options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub options: Vec<DialogOption>,
    pub selected: usize,
}

impl Dialog {
    /// Informational dialog with a single acknowledgement option
    pub fn alert(title: &str, message: &str, ok: &str) -> Self {
        Dialog {
            title: title.to_string(),
            message: message.to_string(),
            options: vec![DialogOption {
                label: ok.to_string(),
                action: None,
            }],
            selected: 0,
        }
    }

    /// Two-option prompt. The cancel option comes first and starts selected.
    pub fn confirm(
        title: &str,
        message: &str,
        cancel: &str,
        confirm: &str,
        action: DialogAction,
    ) -> Self {
        Dialog {
            title: title.to_string(),
            message: message.to_string(),
            options: vec![
                DialogOption {
                    label: cancel.to_string(),
                    action: None,
                },
                DialogOption {
                    label: confirm.to_string(),
                    action: Some(action),
                },
            ],
            selected: 0,
        }
    }

    pub fn duplicate_task() -> Self {
        Dialog::alert(
            "Task already exists",
            "You can't add a task with the same name",
            "Ok",
        )
    }

    pub fn remove_task(id: TaskId) -> Self {
        Dialog::confirm(
            "Remove task",
            "Are you sure you want to remove this task?",
            "No",
            "Yes",
            DialogAction::RemoveTask(id),
        )
    }

    pub fn is_confirm(&self) -> bool {
        self.options.len() == 2
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
    }

    /// Activate the option at `index` (mouse click). `None` if out of range.
    pub fn choose(&self, index: usize) -> Option<DialogOutcome> {
        self.options
            .get(index)
            .map(|opt| DialogOutcome::Closed(opt.action.clone()))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogOutcome {
        match (key.modifiers, key.code) {
            (_, KeyCode::Enter) => self
                .choose(self.selected)
                .unwrap_or(DialogOutcome::Closed(None)),
            (_, KeyCode::Esc) => DialogOutcome::Closed(None),
            (_, KeyCode::Left | KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                self.select_prev();
                DialogOutcome::Open
            }
            (_, KeyCode::Right | KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                self.select_next();
                DialogOutcome::Open
            }
            (KeyModifiers::NONE, KeyCode::Char('y')) if self.is_confirm() => {
                DialogOutcome::Closed(self.options[1].action.clone())
            }
            (KeyModifiers::NONE, KeyCode::Char('n')) if self.is_confirm() => {
                DialogOutcome::Closed(None)
            }
            _ => DialogOutcome::Open,
        }
    }
}

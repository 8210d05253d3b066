use std::fmt;

/// Task identity, assigned once at creation and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

impl Task {
    /// Create a new, not yet done task
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Copy of this task with `done` flipped
    pub fn toggled(&self) -> Self {
        Task {
            done: !self.done,
            ..self.clone()
        }
    }

    /// Copy of this task with a different title
    pub fn renamed(&self, title: impl Into<String>) -> Self {
        Task {
            title: title.into(),
            ..self.clone()
        }
    }
}

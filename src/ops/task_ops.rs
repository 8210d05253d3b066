use crate::model::task::{Task, TaskId};

/// Error type for task operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("a task named \"{0}\" already exists")]
    DuplicateTitle(String),
}

/// Linear scan for a task by id
pub fn find_task(tasks: &[Task], id: TaskId) -> Option<&Task> {
    tasks.iter().find(|t| t.id == id)
}

/// Duplicate-title guard: exact, case-sensitive match against every task
pub fn has_title(tasks: &[Task], title: &str) -> bool {
    tasks.iter().any(|t| t.title == title)
}

/// Append a new task, rejecting a title that is already taken
pub fn add_task(tasks: &[Task], id: TaskId, title: &str) -> Result<Vec<Task>, TaskError> {
    if has_title(tasks, title) {
        return Err(TaskError::DuplicateTitle(title.to_string()));
    }
    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.extend_from_slice(tasks);
    next.push(Task::new(id, title));
    Ok(next)
}

/// Flip `done` on the matching task. `None` when the id is absent.
pub fn toggle_task_done(tasks: &[Task], id: TaskId) -> Option<Vec<Task>> {
    replace_task(tasks, id, Task::toggled)
}

/// Retitle the matching task. Other titles are not consulted.
pub fn edit_task(tasks: &[Task], id: TaskId, new_title: &str) -> Option<Vec<Task>> {
    replace_task(tasks, id, |t| t.renamed(new_title))
}

/// Drop the matching task. `None` when the id is absent.
pub fn remove_task(tasks: &[Task], id: TaskId) -> Option<Vec<Task>> {
    find_task(tasks, id)?;
    Some(tasks.iter().filter(|t| t.id != id).cloned().collect())
}

fn replace_task(tasks: &[Task], id: TaskId, f: impl Fn(&Task) -> Task) -> Option<Vec<Task>> {
    find_task(tasks, id)?;
    Some(
        tasks
            .iter()
            .map(|t| if t.id == id { f(t) } else { t.clone() })
            .collect(),
    )
}

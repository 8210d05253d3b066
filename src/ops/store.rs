use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::model::task::{Task, TaskId};
use crate::ops::task_ops::{self, TaskError};

/// The task list at one point in time. Never mutated once published.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// 0 for the initial empty list, +1 per published change
    pub version: u64,
    pub tasks: Arc<[Task]>,
}

impl Snapshot {
    fn empty() -> Self {
        Snapshot {
            version: 0,
            tasks: Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        task_ops::find_task(&self.tasks, id)
    }
}

/// Handle returned by [`TaskStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Snapshot)>;

/// Issues task ids from the wall clock (milliseconds), bumping past the last
/// id when the clock has not moved, so ids stay unique and increasing.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn next(&mut self) -> TaskId {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub fn next_at(&mut self, millis: i64) -> TaskId {
        let candidate = u64::try_from(millis).unwrap_or(0);
        let id = if candidate > self.last {
            candidate
        } else {
            self.last + 1
        };
        self.last = id;
        TaskId(id)
    }
}

/// Owns the task list. Every change is published as a new [`Snapshot`]
/// and handed to subscribers in subscription order.
pub struct TaskStore {
    current: Snapshot,
    ids: IdGenerator,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            current: Snapshot::empty(),
            ids: IdGenerator::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The current snapshot (shares the task slice, no copying)
    pub fn snapshot(&self) -> Snapshot {
        self.current.clone()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.current.tasks
    }

    pub fn version(&self) -> u64 {
        self.current.version
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Register a callback for every snapshot published from now on
    pub fn subscribe(&mut self, callback: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false when the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Append a task. A title that exactly matches an existing one is
    /// rejected and the list is left as it was.
    pub fn add_task(&mut self, title: &str) -> Result<TaskId, TaskError> {
        let id = self.ids.next();
        match task_ops::add_task(&self.current.tasks, id, title) {
            Ok(next) => {
                info!(%id, title, "task added");
                self.publish(next);
                Ok(id)
            }
            Err(e) => {
                warn!(title, "rejected duplicate task");
                Err(e)
            }
        }
    }

    pub fn toggle_task_done(&mut self, id: TaskId) {
        match task_ops::toggle_task_done(&self.current.tasks, id) {
            Some(next) => {
                info!(%id, "task toggled");
                self.publish(next);
            }
            None => debug!(%id, "toggle: no such task"),
        }
    }

    /// Retitle a task. Collisions with other titles are allowed here.
    pub fn edit_task(&mut self, id: TaskId, new_title: &str) {
        match task_ops::edit_task(&self.current.tasks, id, new_title) {
            Some(next) => {
                info!(%id, title = new_title, "task renamed");
                self.publish(next);
            }
            None => debug!(%id, "edit: no such task"),
        }
    }

    pub fn remove_task(&mut self, id: TaskId) {
        match task_ops::remove_task(&self.current.tasks, id) {
            Some(next) => {
                info!(%id, "task removed");
                self.publish(next);
            }
            None => debug!(%id, "remove: no such task"),
        }
    }

    fn publish(&mut self, tasks: Vec<Task>) {
        self.current = Snapshot {
            version: self.current.version + 1,
            tasks: Arc::from(tasks),
        };
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.current);
        }
    }
}

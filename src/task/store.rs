//! In-memory task store.
//!
//! The store owns the canonical task collection and the active filter. Every
//! mutation publishes a new immutable [`TaskSnapshot`] through a `watch`
//! channel: readers holding a snapshot never see a half-applied update, and
//! subscribers are woken once per mutation.
//!
//! All operations are total. Unknown ids and unknown filter values are
//! accepted and either apply or do nothing; nothing here returns an error
//! after construction.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use super::filter::TaskFilter;
use super::seed::seed_tasks;
use super::task::{Task, TaskError, TaskStatus};

/// A consistent view of the store at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSnapshot {
    tasks: Arc<[Task]>,
    filter: TaskFilter,
}

impl TaskSnapshot {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Tasks selected by the active filter, in collection order.
    pub fn filtered(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(|task| self.filter.matches(task))
    }
}

/// Number of tasks per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl StatusCounts {
    fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut counts, task| {
            counts.total += 1;
            match task.status() {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
                TaskStatus::Overdue => counts.overdue += 1,
            }
            counts
        })
    }
}

/// Owner of the task collection and the active filter.
#[derive(Debug)]
pub struct TaskStore {
    state: watch::Sender<TaskSnapshot>,
}

/// Store handle injected into the views and the HTTP layer.
pub type SharedTaskStore = Arc<TaskStore>;

impl TaskStore {
    /// Create a store over `tasks` with the filter set to `All`.
    ///
    /// # Errors
    /// Returns `TaskError::DuplicateId` if two tasks share an id.
    pub fn new(tasks: Vec<Task>) -> Result<Self, TaskError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id()) {
                return Err(TaskError::DuplicateId(task.id().clone()));
            }
        }

        let (state, _) = watch::channel(TaskSnapshot {
            tasks: tasks.into(),
            filter: TaskFilter::All,
        });
        Ok(Self { state })
    }

    /// Create a store holding the built-in compliance tasks.
    pub fn seeded() -> Result<Self, TaskError> {
        Self::new(seed_tasks()?)
    }

    pub fn snapshot(&self) -> TaskSnapshot {
        self.state.borrow().clone()
    }

    /// The full collection, unfiltered.
    pub fn tasks(&self) -> Arc<[Task]> {
        Arc::clone(&self.state.borrow().tasks)
    }

    pub fn filter(&self) -> TaskFilter {
        self.state.borrow().filter.clone()
    }

    /// Tasks selected by the active filter. Derived on every call.
    pub fn filtered(&self) -> Vec<Task> {
        self.snapshot().filtered().cloned().collect()
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::tally(self.state.borrow().tasks.iter())
    }

    /// Receiver that is marked changed after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<TaskSnapshot> {
        self.state.subscribe()
    }

    /// Replace the active filter. Any string is accepted.
    pub fn set_filter(&self, value: &str) {
        let filter = TaskFilter::parse(value);
        if matches!(filter, TaskFilter::Unmatched(_)) {
            tracing::debug!(filter = %filter, "Filter matches no status; task list will be empty");
        } else {
            tracing::debug!(filter = %filter, "Task filter changed");
        }
        self.state.send_modify(|snapshot| snapshot.filter = filter);
    }

    /// Mark the task with `id` as `Completed`.
    ///
    /// Idempotent. An unknown `id` is a silent no-op.
    pub fn complete_task(&self, id: &str) {
        let changed = self.state.send_if_modified(|snapshot| {
            let pending = snapshot
                .tasks
                .iter()
                .any(|task| task.id().as_str() == id && task.can_complete());
            if !pending {
                return false;
            }

            snapshot.tasks = snapshot
                .tasks
                .iter()
                .map(|task| {
                    if task.id().as_str() == id {
                        task.completed()
                    } else {
                        task.clone()
                    }
                })
                .collect();
            true
        });

        if changed {
            tracing::info!(task_id = %id, "Task marked complete");
        } else {
            tracing::debug!(task_id = %id, "complete_task had nothing to do");
        }
    }
}

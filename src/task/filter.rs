//! Status filter for the task list.
//!
//! Parsing is total: every string is a valid filter. A value that names no
//! status is kept verbatim and simply selects nothing.

use serde::{Deserialize, Serialize};

use super::task::{Task, TaskStatus};

/// Filter value meaning "no filtering".
pub const ALL_FILTER: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskFilter {
    #[default]
    All,
    Status(TaskStatus),
    /// A value that matches no status.
    Unmatched(String),
}

impl TaskFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL_FILTER {
            return TaskFilter::All;
        }
        match TaskStatus::from_label(value) {
            Some(status) => TaskFilter::Status(status),
            None => TaskFilter::Unmatched(value.to_string()),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Status(status) => task.status() == *status,
            TaskFilter::Unmatched(_) => false,
        }
    }

    /// The exact string this filter was selected with.
    pub fn as_str(&self) -> &str {
        match self {
            TaskFilter::All => ALL_FILTER,
            TaskFilter::Status(status) => status.label(),
            TaskFilter::Unmatched(value) => value,
        }
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TaskFilter {
    fn from(value: String) -> Self {
        TaskFilter::parse(&value)
    }
}

impl From<TaskFilter> for String {
    fn from(filter: TaskFilter) -> Self {
        filter.as_str().to_string()
    }
}

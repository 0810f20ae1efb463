//! Core Task type and its status lifecycle.
//!
//! # Invariants
//! - `id` is unique within a store's collection
//! - `status` only ever moves towards `Completed`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire format for due dates (`YYYY-MM-DD`).
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Unique identifier for a task.
///
/// # Properties
/// - Opaque: compared byte-for-byte, never parsed
/// - Immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status of a compliance task.
///
/// # State Machine
/// ```text
/// Pending     ─┐
/// In Progress ─┼─> Completed
/// Overdue     ─┘
/// ```
///
/// `Completed` is terminal. No other transition exists; in particular a
/// task never becomes `Overdue` by itself when its due date passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    /// Every status, in the order the filter selector lists them.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Overdue,
    ];

    /// Display label, also used as the filter value.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Overdue => "Overdue",
        }
    }

    /// Exact (case-sensitive) inverse of [`TaskStatus::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }

    /// # Property
    /// `is_terminal() => complete() is a no-op`
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single compliance work item.
///
/// Deserialization goes through [`Task::new`], so decoded tasks obey the
/// same checks as constructed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    title: String,
    due_date: NaiveDate,
    assigned_to: String,
    status: TaskStatus,
}

impl Task {
    /// Create a task from its display fields.
    ///
    /// # Errors
    /// Returns `Err` if `id` is empty or `due_date` is not a `YYYY-MM-DD` date.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        due_date: &str,
        assigned_to: impl Into<String>,
        status: TaskStatus,
    ) -> Result<Self, TaskError> {
        let id = TaskId::new(id);
        if id.as_str().is_empty() {
            return Err(TaskError::EmptyId);
        }

        let due_date = NaiveDate::parse_from_str(due_date, DUE_DATE_FORMAT).map_err(|_| {
            TaskError::InvalidDueDate {
                id: id.clone(),
                value: due_date.to_string(),
            }
        })?;

        Ok(Self {
            id,
            title: title.into(),
            due_date,
            assigned_to: assigned_to.into(),
            status,
        })
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Due date rendered in its ISO 8601 wire form.
    pub fn due_date_iso(&self) -> String {
        self.due_date.format(DUE_DATE_FORMAT).to_string()
    }

    pub fn assigned_to(&self) -> &str {
        &self.assigned_to
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Whether the "Mark Complete" action applies to this task.
    pub fn can_complete(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Return a copy of this task with status `Completed`.
    ///
    /// # Postcondition
    /// Every field other than `status` is unchanged.
    pub fn completed(&self) -> Self {
        Self {
            status: TaskStatus::Completed,
            ..self.clone()
        }
    }
}

/// Unchecked wire form of a [`Task`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: String,
    title: String,
    due_date: String,
    assigned_to: String,
    status: TaskStatus,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        Task::new(
            record.id,
            record.title,
            &record.due_date,
            record.assigned_to,
            record.status,
        )
    }
}

/// Errors that can occur while building a task collection.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TaskError {
    #[error("Task id cannot be empty")]
    EmptyId,

    #[error("Task {id} has an invalid due date {value:?} (expected YYYY-MM-DD)")]
    InvalidDueDate { id: TaskId, value: String },

    #[error("Duplicate task id {0}")]
    DuplicateId(TaskId),
}

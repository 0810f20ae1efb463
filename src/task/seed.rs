//! Built-in task data the dashboard starts with.

use super::task::{Task, TaskError, TaskStatus};

/// The five compliance tasks every fresh store is seeded with.
pub fn seed_tasks() -> Result<Vec<Task>, TaskError> {
    Ok(vec![
        Task::new(
            "1",
            "Review AML Policy",
            "2023-12-01",
            "Alice Smith",
            TaskStatus::InProgress,
        )?,
        Task::new(
            "2",
            "KYC Verification - Batch A",
            "2023-11-25",
            "Bob Jones",
            TaskStatus::Overdue,
        )?,
        Task::new(
            "3",
            "Quarterly Audit Report",
            "2023-12-15",
            "Charlie Day",
            TaskStatus::Pending,
        )?,
        Task::new(
            "4",
            "GDPR Compliance Check",
            "2023-11-30",
            "Alice Smith",
            TaskStatus::Completed,
        )?,
        Task::new(
            "5",
            "Update Risk Assessment",
            "2023-12-10",
            "David Lee",
            TaskStatus::Pending,
        )?,
    ])
}

//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskFilter, TaskSnapshot};

/// Request to change the task filter (JSON body or form field).
#[derive(Debug, Clone, Deserialize)]
pub struct FilterRequest {
    /// `All` or a status label; any other value selects nothing
    pub filter: String,
}

/// Active filter together with the tasks it selects.
#[derive(Debug, Clone, Serialize)]
pub struct TaskListResponse {
    pub filter: TaskFilter,
    pub tasks: Vec<Task>,
}

impl From<&TaskSnapshot> for TaskListResponse {
    fn from(snapshot: &TaskSnapshot) -> Self {
        Self {
            filter: snapshot.filter().clone(),
            tasks: snapshot.filtered().cloned().collect(),
        }
    }
}

/// Response after the mock login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub authenticated: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub auth_provider: String,
    pub authenticated: bool,
    pub dev_mode: bool,
}

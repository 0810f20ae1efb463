//! HTTP API and pages of the compliance dashboard.
//!
//! ## Endpoints
//!
//! Public:
//! - `GET /` - Login prompt, or the composed dashboard once signed in
//! - `POST /login` - Mock login (form), redirects to `/`
//! - `POST /api/auth/login` - Mock login (JSON)
//! - `GET /api/health` - Health check
//!
//! Behind the login gate:
//! - `POST /tasks/filter` - Change the task filter (form), redirects to `/`
//! - `POST /tasks/{id}/complete` - Mark a task complete (form), redirects to `/`
//! - `GET /api/tasks` - Active filter and the tasks it selects
//! - `POST /api/tasks/filter` - Change the task filter
//! - `POST /api/tasks/{id}/complete` - Mark a task complete
//! - `GET /api/tasks/stream` - Stream task snapshots via SSE
//! - `GET /api/stats` - Task counts per status
//! - `GET /api/status` - Compliance status chart data
//! - `GET /api/activity` - Recent activity feed

mod auth;
mod routes;
mod tasks;
pub mod types;

pub use routes::{router, serve, AppState};
pub use types::*;

//! # Compliance Dashboard
//!
//! A small compliance dashboard served over HTTP: a task list that can be
//! filtered by status and worked off, a status chart and a recent-activity
//! feed, all behind a mock login.
//!
//! ## Architecture
//!
//! ```text
//!        ┌──────────────────────────────────┐
//!        │              Shell               │
//!        │   (auth gate + view composition) │
//!        └────────────────┬─────────────────┘
//!                         │ ViewRegistry
//!        ┌────────────────┼─────────────────┐
//!        ▼                ▼                 ▼
//!  ┌────────────┐  ┌─────────────┐  ┌──────────────┐
//!  │TaskOverview│  │ Compliance  │  │   Recent     │
//!  │            │  │   Status    │  │   Activity   │
//!  └─────┬──────┘  └─────────────┘  └──────────────┘
//!        │
//!        ▼
//!  ┌────────────┐
//!  │ TaskStore  │
//!  └────────────┘
//! ```
//!
//! ## Request Flow
//! 1. A form post or API call reaches a handler
//! 2. The handler calls one store operation (filter or complete)
//! 3. The store publishes a new snapshot; subscribers are woken
//! 4. The next render reads the snapshot and re-derives the filtered list
//!
//! ## Modules
//! - `task`: Task types, the status filter and the task store
//! - `views`: Dashboard views and the view registry
//! - `shell`: Auth gate and page layout
//! - `api`: HTTP routes

pub mod api;
pub mod config;
pub mod shell;
pub mod task;
pub mod views;

pub use config::Config;
pub use task::{TaskStore, TaskStatus};

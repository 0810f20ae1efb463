//! Task module - compliance tasks, the status filter and the task store.
//!
//! - All types use algebraic data types with exhaustive matching
//! - Invariants are documented and enforced in constructors
//! - Store operations are total: they apply or do nothing, never fail

mod filter;
mod seed;
pub mod store;
pub mod task;

pub use filter::{TaskFilter, ALL_FILTER};
pub use seed::seed_tasks;
pub use store::{SharedTaskStore, StatusCounts, TaskSnapshot, TaskStore};
pub use task::{Task, TaskError, TaskId, TaskStatus};

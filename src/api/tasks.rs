//! Task store endpoints.
//!
//! Every handler is a thin call into the [`TaskStore`](crate::task::TaskStore).
//! Unknown ids and unknown filter values are not errors: the store ignores
//! them and the handler answers as if the operation succeeded.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    response::{
        sse::{Event, KeepAlive, Sse},
        Json, Redirect,
    },
    Form,
};
use futures::stream::Stream;

use crate::task::{StatusCounts, Task};
use crate::views::{Activity, StatusReport};

use super::routes::AppState;
use super::types::{FilterRequest, TaskListResponse};

/// Filtered task list.
pub async fn list_tasks(State(state): State<Arc<AppState>>) -> Json<TaskListResponse> {
    Json(TaskListResponse::from(&state.store.snapshot()))
}

/// Change the filter; returns the newly filtered list.
pub async fn set_filter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FilterRequest>,
) -> Json<TaskListResponse> {
    state.store.set_filter(&req.filter);
    Json(TaskListResponse::from(&state.store.snapshot()))
}

/// Mark a task complete; returns the full, unfiltered collection.
pub async fn complete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<Vec<Task>> {
    state.store.complete_task(&id);
    Json(state.store.tasks().to_vec())
}

/// Filter selector form of the Task Overview view.
pub async fn set_filter_form(
    State(state): State<Arc<AppState>>,
    Form(req): Form<FilterRequest>,
) -> Redirect {
    state.store.set_filter(&req.filter);
    Redirect::to("/")
}

/// "Mark Complete" form of the Task Overview view.
pub async fn complete_task_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Redirect {
    state.store.complete_task(&id);
    Redirect::to("/")
}

/// Per-status counts of the live collection.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatusCounts> {
    Json(state.store.status_counts())
}

/// Data behind the Compliance Status view.
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusReport> {
    Json(state.status.report().clone())
}

/// Data behind the Recent Activity view.
pub async fn get_activity(State(state): State<Arc<AppState>>) -> Json<Vec<Activity>> {
    Json(state.activity.entries().to_vec())
}

/// Stream a `snapshot` event now and after every store mutation.
pub async fn stream_tasks(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut rx = state.store.subscribe();

    let stream = async_stream::stream! {
        loop {
            let payload = TaskListResponse::from(&*rx.borrow_and_update());
            match Event::default().event("snapshot").json_data(&payload) {
                Ok(event) => {
                    yield Ok(event);
                }
                Err(e) => tracing::warn!("Failed to encode task snapshot: {}", e),
            }

            if rx.changed().await.is_err() {
                break;
            }
        }
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keepalive"),
    )
}

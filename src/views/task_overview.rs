//! Task Overview: filterable table of compliance tasks.
//!
//! A pure projection of the injected [`TaskStore`](crate::task::TaskStore).
//! The filter selector posts to `/tasks/filter` and each "Mark Complete"
//! control posts to `/tasks/{id}/complete`; both forms are handled by the
//! HTTP layer, which calls back into the store.

use crate::task::{SharedTaskStore, Task, TaskFilter, TaskSnapshot, TaskStatus, ALL_FILTER};

use super::html::{card, escape};
use super::{View, TASK_OVERVIEW};

/// Accessible label of the filter selector.
pub const FILTER_LABEL: &str = "Filter tasks by status";
/// Text of the per-row completion control.
pub const COMPLETE_ACTION: &str = "Mark Complete";

const COLUMNS: [&str; 5] = ["Task Title", "Due Date", "Assigned To", "Status", "Actions"];

pub struct TaskOverview {
    store: SharedTaskStore,
}

impl TaskOverview {
    pub fn new(store: SharedTaskStore) -> Self {
        Self { store }
    }
}

impl View for TaskOverview {
    fn slot(&self) -> &'static str {
        TASK_OVERVIEW
    }

    fn title(&self) -> &'static str {
        "Task Overview"
    }

    fn render(&self) -> String {
        let snapshot = self.store.snapshot();
        let body = format!("{}{}", filter_form(snapshot.filter()), table(&snapshot));
        card(self.slot(), self.title(), &body)
    }
}

/// Badge tone for a status.
pub fn badge_tone(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "success",
        TaskStatus::Overdue => "danger",
        TaskStatus::InProgress => "info",
        TaskStatus::Pending => "neutral",
    }
}

fn filter_form(current: &TaskFilter) -> String {
    let mut options = vec![(ALL_FILTER, "All Statuses")];
    options.extend(TaskStatus::ALL.iter().map(|s| (s.label(), s.label())));

    let options: String = options
        .into_iter()
        .map(|(value, text)| {
            let selected = if value == current.as_str() { " selected" } else { "" };
            format!(
                "<option value=\"{}\"{}>{}</option>",
                escape(value),
                selected,
                escape(text)
            )
        })
        .collect();

    format!(
        "<form class=\"task-filter\" method=\"post\" action=\"/tasks/filter\">\
         <select name=\"filter\" aria-label=\"{label}\" \
         onchange=\"this.form.submit()\">{options}</select>\
         <noscript><button type=\"submit\">Apply</button></noscript>\
         </form>",
        label = escape(FILTER_LABEL),
    )
}

fn table(snapshot: &TaskSnapshot) -> String {
    let head: String = COLUMNS
        .iter()
        .map(|c| format!("<th scope=\"col\">{}</th>", escape(c)))
        .collect();
    let rows: String = snapshot.filtered().map(row).collect();

    format!(
        "<table class=\"task-table\"><thead><tr>{head}</tr></thead><tbody>{rows}</tbody></table>"
    )
}

fn row(task: &Task) -> String {
    let action = if task.can_complete() {
        format!(
            "<form method=\"post\" action=\"/tasks/{}/complete\">\
             <button type=\"submit\">{}</button></form>",
            escape(&urlencoding::encode(task.id().as_str())),
            COMPLETE_ACTION
        )
    } else {
        String::new()
    };

    format!(
        "<tr data-task-id=\"{id}\">\
         <td class=\"task-title\">{title}</td>\
         <td>{due}</td>\
         <td>{assignee}</td>\
         <td><span class=\"badge badge-{tone}\">{status}</span></td>\
         <td>{action}</td>\
         </tr>",
        id = escape(task.id().as_str()),
        title = escape(task.title()),
        due = task.due_date_iso(),
        assignee = escape(task.assigned_to()),
        tone = badge_tone(task.status()),
        status = task.status(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStore;
    use std::sync::Arc;

    fn view() -> (SharedTaskStore, TaskOverview) {
        let store = Arc::new(TaskStore::seeded().unwrap());
        let view = TaskOverview::new(Arc::clone(&store));
        (store, view)
    }

    fn row_html<'a>(html: &'a str, id: &str) -> &'a str {
        let start = html
            .find(&format!("<tr data-task-id=\"{}\">", id))
            .expect("row present");
        let end = html[start..].find("</tr>").expect("row closed");
        &html[start..start + end]
    }

    #[test]
    fn test_renders_all_seed_rows() {
        let (_, view) = view();
        let html = view.render();
        assert!(html.contains("Task Overview"));
        assert!(html.contains("Review AML Policy"));
        assert!(html.contains("Alice Smith"));
        assert!(html.contains(FILTER_LABEL));
        assert_eq!(html.matches("<tr data-task-id=").count(), 5);
    }

    #[test]
    fn test_action_only_on_open_tasks() {
        let (_, view) = view();
        let html = view.render();
        assert!(row_html(&html, "1").contains(COMPLETE_ACTION));
        assert!(row_html(&html, "1").contains("action=\"/tasks/1/complete\""));
        assert!(!row_html(&html, "4").contains(COMPLETE_ACTION));
        assert!(row_html(&html, "4").contains(">Completed</span>"));
    }

    #[test]
    fn test_rows_follow_store_filter_and_order() {
        let (store, view) = view();
        store.set_filter("Pending");
        let html = view.render();
        assert_eq!(html.matches("<tr data-task-id=").count(), 2);
        let first = html.find("Quarterly Audit Report").unwrap();
        let second = html.find("Update Risk Assessment").unwrap();
        assert!(first < second);
        assert!(html.contains("<option value=\"Pending\" selected>"));
    }

    #[test]
    fn test_completion_is_reflected_on_next_render() {
        let (store, view) = view();
        store.complete_task("1");
        let html = view.render();
        let row = row_html(&html, "1");
        assert!(!row.contains(COMPLETE_ACTION));
        assert!(row.contains("badge-success\">Completed</span>"));
    }

    #[test]
    fn test_unknown_filter_renders_empty_table() {
        let (store, view) = view();
        store.set_filter("Archived");
        let html = view.render();
        assert!(html.contains("<tbody></tbody>"));
        assert!(!html.contains(" selected>"));
    }
}

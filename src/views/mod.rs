//! Dashboard views and the registry the shell composes them from.
//!
//! Each view is an independent component registered under a slot name at
//! startup. The shell only knows slot names; it resolves them through the
//! [`ViewRegistry`] when it renders, and falls back to a placeholder panel
//! for a slot nobody registered.

pub mod compliance_status;
pub mod html;
pub mod recent_activity;
pub mod task_overview;

use std::collections::HashMap;
use std::sync::Arc;

pub use compliance_status::{ComplianceStatus, StatusReport, StatusSlice};
pub use recent_activity::{Activity, ActivityCategory, RecentActivity};
pub use task_overview::TaskOverview;

/// Slot of the task list view.
pub const TASK_OVERVIEW: &str = "taskOverview";
/// Slot of the status chart view.
pub const COMPLIANCE_STATUS: &str = "complianceStatus";
/// Slot of the activity feed view.
pub const RECENT_ACTIVITY: &str = "recentActivity";

/// A renderable dashboard panel.
pub trait View: Send + Sync {
    /// Registry key the shell refers to this view by.
    fn slot(&self) -> &'static str;

    /// Card title.
    fn title(&self) -> &'static str;

    /// HTML fragment for the panel, deterministic for a given state.
    fn render(&self) -> String;
}

pub type ViewRef = Arc<dyn View>;

/// Views available to the shell, keyed by slot.
#[derive(Default)]
pub struct ViewRegistry {
    views: HashMap<&'static str, ViewRef>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `view` under its slot, replacing any earlier registration.
    pub fn register(&mut self, view: ViewRef) {
        let slot = view.slot();
        if self.views.insert(slot, view).is_some() {
            tracing::warn!(slot, "Replacing previously registered view");
        } else {
            tracing::debug!(slot, "Registered view");
        }
    }

    pub fn resolve(&self, slot: &str) -> Option<ViewRef> {
        self.views.get(slot).cloned()
    }

    pub fn slots(&self) -> Vec<&'static str> {
        let mut slots: Vec<_> = self.views.keys().copied().collect();
        slots.sort_unstable();
        slots
    }

    /// Render the view in `slot`, or a placeholder if none is registered.
    pub fn render_slot(&self, slot: &str) -> String {
        match self.resolve(slot) {
            Some(view) => view.render(),
            None => {
                tracing::warn!(slot, "No view registered for slot; rendering placeholder");
                placeholder(slot)
            }
        }
    }
}

fn placeholder(slot: &str) -> String {
    format!(
        "<section class=\"card placeholder\" data-view=\"{}\" aria-busy=\"true\"></section>",
        html::escape(slot)
    )
}

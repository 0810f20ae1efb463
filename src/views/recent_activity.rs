//! Recent Activity: fixed feed of historical events.

use serde::Serialize;

use super::html::{card, escape};
use super::{View, RECENT_ACTIVITY};

/// Kind of event, drives the feed icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Completion,
    Alert,
    Update,
    User,
}

impl ActivityCategory {
    fn icon(&self) -> &'static str {
        match self {
            ActivityCategory::Completion => "\u{2714}",
            ActivityCategory::Alert => "\u{26A0}",
            ActivityCategory::Update => "\u{23F1}",
            ActivityCategory::User => "\u{1F464}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// Stable key of the entry within the feed.
    pub id: u32,
    pub actor: String,
    pub description: String,
    /// Human-relative time, e.g. "10 mins ago".
    pub timestamp: String,
    pub category: ActivityCategory,
}

impl Activity {
    pub fn new(
        id: u32,
        actor: &str,
        description: &str,
        timestamp: &str,
        category: ActivityCategory,
    ) -> Self {
        Self {
            id,
            actor: actor.to_string(),
            description: description.to_string(),
            timestamp: timestamp.to_string(),
            category,
        }
    }
}

pub struct RecentActivity {
    entries: Vec<Activity>,
}

impl RecentActivity {
    pub fn new(entries: Vec<Activity>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Activity] {
        &self.entries
    }
}

impl Default for RecentActivity {
    fn default() -> Self {
        Self::new(vec![
            Activity::new(
                1,
                "Alice Smith",
                "Completed task \"GDPR Check\"",
                "10 mins ago",
                ActivityCategory::Completion,
            ),
            Activity::new(
                2,
                "System",
                "Alert: Policy #404 Overdue",
                "1 hour ago",
                ActivityCategory::Alert,
            ),
            Activity::new(
                3,
                "Bob Jones",
                "Updated \"KYC Verification\"",
                "2 hours ago",
                ActivityCategory::Update,
            ),
            Activity::new(
                4,
                "Admin",
                "Added new user \"Sarah\"",
                "1 day ago",
                ActivityCategory::User,
            ),
        ])
    }
}

impl View for RecentActivity {
    fn slot(&self) -> &'static str {
        RECENT_ACTIVITY
    }

    fn title(&self) -> &'static str {
        "Recent Activity"
    }

    fn render(&self) -> String {
        let items: String = self
            .entries
            .iter()
            .map(|entry| {
                format!(
                    "<li class=\"activity activity-{category}\" data-activity-id=\"{id}\">\
                     <span class=\"activity-icon\" aria-hidden=\"true\">{icon}</span>\
                     <div><p class=\"activity-description\">{description}</p>\
                     <p class=\"activity-meta\">{actor} \u{2022} {timestamp}</p></div>\
                     </li>",
                    id = entry.id,
                    category = category_class(entry.category),
                    icon = entry.category.icon(),
                    description = escape(&entry.description),
                    actor = escape(&entry.actor),
                    timestamp = escape(&entry.timestamp),
                )
            })
            .collect();

        let body = format!("<ul class=\"activity-feed\">{items}</ul>");
        card(self.slot(), self.title(), &body)
    }
}

fn category_class(category: ActivityCategory) -> &'static str {
    match category {
        ActivityCategory::Completion => "completion",
        ActivityCategory::Alert => "alert",
        ActivityCategory::Update => "update",
        ActivityCategory::User => "user",
    }
}

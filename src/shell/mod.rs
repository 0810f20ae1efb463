//! Shell (host) of the dashboard.
//!
//! Responsibilities:
//! 1. Authentication gate, delegated to an [`AuthProvider`]
//! 2. Global layout (sidebar, header, columns)
//! 3. Composition of the registered views
//!
//! Nothing but the login prompt is rendered until the provider reports a
//! signed-in user.

pub mod auth;

use crate::views::html::{escape, page};
use crate::views::{ViewRegistry, COMPLIANCE_STATUS, RECENT_ACTIVITY, TASK_OVERVIEW};

pub use auth::{AuthProvider, AuthProviderRef, MockAuthProvider};

/// Page title and login card heading.
pub const APP_TITLE: &str = "Compliance Dashboard";
/// Text of the mock login control.
pub const LOGIN_ACTION: &str = "Login (Mock)";

/// Slots of the wide main column, top to bottom.
pub const MAIN_COLUMN: [&str; 2] = [TASK_OVERVIEW, RECENT_ACTIVITY];
/// Slots of the narrow side column, top to bottom.
pub const SIDE_COLUMN: [&str; 1] = [COMPLIANCE_STATUS];

const NAV_LINKS: [&str; 4] = ["Dashboard", "Tasks", "Reports", "Settings"];

/// Signed-in user shown at the bottom of the sidebar.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_default()
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
        }
    }
}

pub struct Shell {
    auth: AuthProviderRef,
    views: ViewRegistry,
    profile: UserProfile,
}

impl Shell {
    pub fn new(auth: AuthProviderRef, views: ViewRegistry) -> Self {
        Self {
            auth,
            views,
            profile: UserProfile::default(),
        }
    }

    pub fn auth(&self) -> &AuthProviderRef {
        &self.auth
    }

    /// Login prompt or composed dashboard, depending on the auth gate.
    pub async fn render(&self) -> String {
        if self.auth.is_authenticated().await {
            self.dashboard_page()
        } else {
            login_page()
        }
    }

    fn dashboard_page(&self) -> String {
        let column = |slots: &[&str]| -> String {
            slots.iter().map(|slot| self.views.render_slot(slot)).collect()
        };

        let body = format!(
            "<div class=\"layout\">{sidebar}\
             <main class=\"content\">\
             <header class=\"page-header\"><h2>Dashboard Overview</h2>\
             <div class=\"page-actions\">\
             <button type=\"button\">Export Report</button>\
             <button type=\"button\">+ New Task</button>\
             </div></header>\
             <div class=\"grid\">\
             <div class=\"column column-main\">{main}</div>\
             <div class=\"column column-side\">{side}</div>\
             </div></main></div>",
            sidebar = self.sidebar(),
            main = column(&MAIN_COLUMN[..]),
            side = column(&SIDE_COLUMN[..]),
        );
        page(APP_TITLE, &body)
    }

    fn sidebar(&self) -> String {
        let links: String = NAV_LINKS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let class = if i == 0 { "nav-link active" } else { "nav-link" };
                format!("<a href=\"#\" class=\"{class}\">{label}</a>")
            })
            .collect();

        format!(
            "<aside class=\"sidebar\">\
             <h1 class=\"brand\">Compliance</h1>\
             <nav><div class=\"nav-heading\">Overview</div>{links}</nav>\
             <div class=\"profile\"><div class=\"avatar\">{initial}</div>\
             <div><div class=\"profile-name\">{name}</div>\
             <div class=\"profile-email\">{email}</div></div></div>\
             </aside>",
            initial = escape(&self.profile.initial()),
            name = escape(&self.profile.name),
            email = escape(&self.profile.email),
        )
    }
}

fn login_page() -> String {
    let body = format!(
        "<div class=\"login\">\
         <h2>{title}</h2>\
         <p>Sign in to continue</p>\
         <form method=\"post\" action=\"/login\"><button type=\"submit\">{action}</button></form>\
         </div>",
        title = escape(APP_TITLE),
        action = escape(LOGIN_ACTION),
    );
    page(APP_TITLE, &body)
}

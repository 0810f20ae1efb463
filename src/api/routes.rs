//! HTTP route handlers.

use std::sync::Arc;

use axum::middleware;
use axum::{
    extract::State,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::shell::{AuthProviderRef, MockAuthProvider, Shell};
use crate::task::{SharedTaskStore, TaskError, TaskStore};
use crate::views::{ComplianceStatus, RecentActivity, TaskOverview, ViewRegistry};

use super::auth;
use super::tasks;
use super::types::*;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// Task store shared with the Task Overview view
    pub store: SharedTaskStore,
    /// Status chart data (also registered as a view)
    pub status: Arc<ComplianceStatus>,
    /// Activity feed data (also registered as a view)
    pub activity: Arc<RecentActivity>,
    /// Auth gate and view composition
    pub shell: Shell,
}

impl AppState {
    /// Build the seeded store, register the views and wire the mock login.
    pub fn new(config: Config) -> Result<Self, TaskError> {
        Self::with_auth(config, Arc::new(MockAuthProvider::new()))
    }

    pub fn with_auth(config: Config, auth: AuthProviderRef) -> Result<Self, TaskError> {
        let store: SharedTaskStore = Arc::new(TaskStore::seeded()?);
        let status = Arc::new(ComplianceStatus::default());
        let activity = Arc::new(RecentActivity::default());

        let mut views = ViewRegistry::new();
        views.register(Arc::new(TaskOverview::new(Arc::clone(&store))));
        views.register(status.clone());
        views.register(activity.clone());
        tracing::info!(
            "Registered views: {}; auth provider: {}",
            views.slots().join(", "),
            auth.name()
        );

        Ok(Self {
            config,
            store,
            status,
            activity,
            shell: Shell::new(auth, views),
        })
    }
}

/// Assemble the public and login-gated routes.
pub fn router(state: Arc<AppState>) -> Router {
    let public_routes = Router::new()
        .route("/", get(dashboard))
        .route("/login", post(auth::login_form))
        .route("/api/health", get(health))
        .route("/api/auth/login", post(auth::login));

    let protected_routes = Router::new()
        // Form actions of the Task Overview view
        .route("/tasks/filter", post(tasks::set_filter_form))
        .route("/tasks/:id/complete", post(tasks::complete_task_form))
        // Task store endpoints
        .route("/api/tasks", get(tasks::list_tasks))
        .route("/api/tasks/filter", post(tasks::set_filter))
        .route("/api/tasks/stream", get(tasks::stream_tasks))
        .route("/api/tasks/:id/complete", post(tasks::complete_task))
        .route("/api/stats", get(tasks::get_stats))
        // Read-only view data
        .route("/api/status", get(tasks::get_status))
        .route("/api/activity", get(tasks::get_activity))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            auth::require_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    if config.dev_mode {
        tracing::warn!("DEV_MODE enabled: protected routes skip the login gate");
    }

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(config)?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGTERM/SIGINT.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Login prompt or the composed dashboard.
async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.shell.render().await)
}

/// Health check endpoint.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let auth = state.shell.auth();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        auth_provider: auth.name().to_string(),
        authenticated: auth.is_authenticated().await,
        dev_mode: state.config.dev_mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    fn app_with(config: Config) -> (Arc<AppState>, Router) {
        let state = Arc::new(AppState::new(config).unwrap());
        (Arc::clone(&state), router(state))
    }

    fn app() -> (Arc<AppState>, Router) {
        app_with(Config::new("127.0.0.1", 0))
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn login(app: &Router) {
        let response = app.clone().oneshot(post_form("/login", "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    fn row<'a>(html: &'a str, id: &str) -> &'a str {
        let start = html
            .find(&format!("<tr data-task-id=\"{}\">", id))
            .expect("row present");
        let end = html[start..].find("</tr>").expect("row closed");
        &html[start..start + end]
    }

    #[tokio::test]
    async fn test_protected_content_hidden_until_login() {
        let (_, app) = app();

        let (status, html) = send(&app, get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Login (Mock)"));
        assert!(!html.contains("Task Overview"));
        assert!(!html.contains("Review AML Policy"));

        let (status, _) = send(&app, get("/api/tasks")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let (status, _) = send(&app, post_form("/tasks/1/complete", "")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        login(&app).await;

        let (_, html) = send(&app, get("/")).await;
        assert!(!html.contains("Login (Mock)"));
        assert!(html.contains("Dashboard Overview"));
        assert!(html.contains("Task Overview"));
        assert!(html.contains("Compliance Status"));
        assert!(html.contains("Recent Activity"));
    }

    #[tokio::test]
    async fn test_rejected_mutation_leaves_store_untouched() {
        let (state, app) = app();
        let before = state.store.snapshot();
        let (status, _) = send(&app, post_form("/tasks/filter", "filter=Completed")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(state.store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_completed_filter_hides_in_progress_task() {
        let (_, app) = app();
        login(&app).await;

        let (_, html) = send(&app, get("/")).await;
        assert!(html.contains("Review AML Policy"));

        let (status, _) = send(&app, post_form("/tasks/filter", "filter=Completed")).await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        let (_, html) = send(&app, get("/")).await;
        assert!(!html.contains("Review AML Policy"));
        assert!(html.contains("GDPR Compliance Check"));
        assert!(html.contains("<option value=\"Completed\" selected>"));
    }

    #[tokio::test]
    async fn test_mark_complete_removes_action_from_row() {
        let (_, app) = app();
        login(&app).await;

        let (_, html) = send(&app, get("/")).await;
        assert!(row(&html, "1").contains("Mark Complete"));
        assert!(row(&html, "1").contains(">In Progress</span>"));

        let (status, _) = send(&app, post_form("/tasks/1/complete", "")).await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        let (_, html) = send(&app, get("/")).await;
        let row = row(&html, "1");
        assert!(row.contains("Review AML Policy"));
        assert!(!row.contains("Mark Complete"));
        assert!(row.contains(">Completed</span>"));
    }

    #[tokio::test]
    async fn test_json_filter_and_complete() {
        let (_, app) = app();
        login(&app).await;

        let body = serde_json::json!({"filter": "Pending"});
        let (status, body) = send(&app, post_json("/api/tasks/filter", body)).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["filter"], "Pending");
        let ids: Vec<&str> = value["tasks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["3", "5"]);

        let (status, body) =
            send(&app, post_json("/api/tasks/3/complete", serde_json::json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        let tasks: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(tasks.as_array().unwrap().len(), 5);
        assert_eq!(tasks[2]["status"], "Completed");

        let (_, body) = send(&app, get("/api/tasks")).await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["tasks"].as_array().unwrap().len(), 1);
        assert_eq!(value["tasks"][0]["title"], "Update Risk Assessment");
    }

    #[tokio::test]
    async fn test_unknown_id_and_filter_are_not_errors() {
        let (state, app) = app();
        login(&app).await;
        let before = state.store.tasks();

        let (status, _) = send(&app, post_form("/tasks/nope/complete", "")).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(state.store.tasks(), before);

        let body = serde_json::json!({"filter": "Archived"});
        let (status, body) = send(&app, post_json("/api/tasks/filter", body)).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["filter"], "Archived");
        assert!(value["tasks"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stats_and_read_only_views() {
        let (_, app) = app();
        login(&app).await;
        send(&app, post_form("/tasks/2/complete", "")).await;

        let (_, body) = send(&app, get("/api/stats")).await;
        let stats: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(stats["total"], 5);
        assert_eq!(stats["completed"], 2);
        assert_eq!(stats["overdue"], 0);

        let (_, body) = send(&app, get("/api/status")).await;
        let report: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(report["overallCompliance"], 75);
        assert_eq!(report["slices"][0]["label"], "Completed");

        let (_, body) = send(&app, get("/api/activity")).await;
        let activity: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(activity.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_dev_mode_skips_gate() {
        let mut config = Config::new("127.0.0.1", 0);
        config.dev_mode = true;
        let (_, app) = app_with(config);

        let (status, _) = send(&app, get("/api/tasks")).await;
        assert_eq!(status, StatusCode::OK);

        // The page itself still follows the auth provider.
        let (_, html) = send(&app, get("/")).await;
        assert!(html.contains("Login (Mock)"));
    }

    #[tokio::test]
    async fn test_health_reports_login_state() {
        let (_, app) = app();
        let (_, body) = send(&app, get("/api/health")).await;
        let health: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["auth_provider"], "mock");
        assert_eq!(health["authenticated"], false);

        let (status, body) = send(&app, post_json("/api/auth/login", serde_json::json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"authenticated\":true"));

        let (_, body) = send(&app, get("/api/health")).await;
        let health: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(health["authenticated"], true);
    }

    #[tokio::test]
    async fn test_task_stream_requires_login() {
        let (_, app) = app();
        let (status, _) = send(&app, get("/api/tasks/stream")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        login(&app).await;
        let response = app.clone().oneshot(get("/api/tasks/stream")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");
    }

    fn snapshot_frame(frame: &[u8]) -> serde_json::Value {
        let text = std::str::from_utf8(frame).unwrap();
        assert!(text.starts_with("event: snapshot\n"), "unexpected frame: {}", text);
        let data = text
            .lines()
            .find_map(|line| line.strip_prefix("data: "))
            .expect("data line");
        serde_json::from_str(data).unwrap()
    }

    fn ids(value: &serde_json::Value) -> Vec<&str> {
        value["tasks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_task_stream_sends_snapshot_per_mutation() {
        use futures::StreamExt;

        let (state, app) = app();
        login(&app).await;
        let response = app.clone().oneshot(get("/api/tasks/stream")).await.unwrap();
        let mut frames = response.into_body().into_data_stream();

        let first = snapshot_frame(&frames.next().await.unwrap().unwrap());
        assert_eq!(first["filter"], "All");
        assert_eq!(ids(&first), vec!["1", "2", "3", "4", "5"]);

        state.store.set_filter("Completed");
        let second = snapshot_frame(&frames.next().await.unwrap().unwrap());
        assert_eq!(second["filter"], "Completed");
        assert_eq!(ids(&second), vec!["4"]);

        // Unknown ids publish nothing.
        state.store.complete_task("nope");
        let idle =
            tokio::time::timeout(std::time::Duration::from_millis(50), frames.next()).await;
        assert!(idle.is_err());

        state.store.complete_task("1");
        let third = snapshot_frame(&frames.next().await.unwrap().unwrap());
        assert_eq!(third["filter"], "Completed");
        assert_eq!(ids(&third), vec!["1", "4"]);
    }
}

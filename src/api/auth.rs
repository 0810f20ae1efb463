//! Mock login for the dashboard.
//!
//! - The login prompt posts to `/login` (or a client calls `/api/auth/login`)
//! - The shell's auth provider flips to signed-in; no credentials are checked
//! - When `DEV_MODE=false`, protected routes answer `401` until then

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};

use super::routes::AppState;
use super::types::LoginResponse;

/// JSON mock login.
pub async fn login(State(state): State<Arc<AppState>>) -> Json<LoginResponse> {
    let authenticated = state.shell.auth().sign_in().await;
    Json(LoginResponse { authenticated })
}

/// Form mock login from the login prompt; back to the dashboard afterwards.
pub async fn login_form(State(state): State<Arc<AppState>>) -> Redirect {
    state.shell.auth().sign_in().await;
    Redirect::to("/")
}

pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    // Dev mode => no auth checks.
    if state.config.dev_mode {
        return next.run(req).await;
    }

    if state.shell.auth().is_authenticated().await {
        next.run(req).await
    } else {
        tracing::debug!(path = %req.uri().path(), "Rejected request before login");
        (StatusCode::UNAUTHORIZED, "Login required").into_response()
    }
}

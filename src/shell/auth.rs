//! Authentication collaborator of the shell.
//!
//! The shell only asks one question, "is someone signed in?", and triggers
//! one action, "sign in". A real identity provider would sit behind the same
//! trait; [`MockAuthProvider`] flips a flag and checks no credentials.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Short name for logs and the health endpoint.
    fn name(&self) -> &'static str;

    async fn is_authenticated(&self) -> bool;

    /// Run the sign-in flow. Returns whether a user is signed in afterwards.
    async fn sign_in(&self) -> bool;
}

pub type AuthProviderRef = Arc<dyn AuthProvider>;

/// One-way boolean gate standing in for a real login.
///
/// The flag is process-wide, not per session: once any client signs in, the
/// dashboard is open to every client of this process until it restarts.
/// Each fresh provider starts signed out.
#[derive(Debug, Default)]
pub struct MockAuthProvider {
    authenticated: AtomicBool,
}

impl MockAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Acquire)
    }

    async fn sign_in(&self) -> bool {
        if !self.authenticated.swap(true, Ordering::AcqRel) {
            tracing::info!("Mock login accepted; dashboard unlocked");
        }
        true
    }
}

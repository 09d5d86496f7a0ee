//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use docshelf_auth::SessionStore;
use docshelf_core::config::AppConfig;
use docshelf_core::traits::{CredentialStore, DocumentStore};
use docshelf_service::{AccountService, DocumentService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Document listing, rendering, and mutation
    pub documents: Arc<DocumentService>,
    /// Sign-in and sign-up
    pub accounts: Arc<AccountService>,
    /// Browser sessions
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Wire services around the given stores.
    pub fn new(
        config: AppConfig,
        documents: Arc<dyn DocumentStore>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        let sessions = SessionStore::new(&config.session);
        Self {
            config: Arc::new(config),
            documents: Arc::new(DocumentService::new(documents)),
            accounts: Arc::new(AccountService::new(credentials)),
            sessions: Arc::new(sessions),
        }
    }
}

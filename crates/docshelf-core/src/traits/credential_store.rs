//! Username to password-hash storage.

use async_trait::async_trait;

use crate::result::AppResult;

/// Persisted mapping of usernames to salted password hashes.
///
/// Hashes are opaque to callers; they only ever verify a plaintext password
/// against what is stored. Storage faults surface as `Storage` errors.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug + 'static {
    /// Check a plaintext password. Unknown usernames yield `Ok(false)`.
    async fn verify(&self, username: &str, password: &str) -> AppResult<bool>;

    /// Whether a username is registered.
    async fn exists(&self, username: &str) -> AppResult<bool>;

    /// Register a new user. Existing usernames yield a `Conflict` error.
    async fn create(&self, username: &str, password: &str) -> AppResult<()>;

    /// All registered usernames, sorted.
    async fn usernames(&self) -> AppResult<Vec<String>>;
}

//! Storage trait for named documents.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;
use crate::types::RenderMode;

/// A flat collection of named documents.
///
/// Names are unique and double as the relative storage path. Implementations
/// exist for a local directory and for memory (`docshelf-storage`).
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g. "local", "memory").
    fn provider_type(&self) -> &str;

    /// Enumerate document names. Order is unspecified.
    async fn list(&self) -> AppResult<Vec<String>>;

    /// Read a document's raw content. Missing documents yield `NotFound`.
    async fn read(&self, name: &str) -> AppResult<Bytes>;

    /// Replace a document's content, creating it when absent.
    async fn write(&self, name: &str, data: Bytes) -> AppResult<()>;

    /// Create a document only if no document with this name exists.
    ///
    /// Returns a `Conflict` error when the name is taken, so two concurrent
    /// creations of the same name cannot both succeed.
    async fn create(&self, name: &str, data: Bytes) -> AppResult<()>;

    /// Delete a document. Missing documents yield `NotFound`.
    async fn delete(&self, name: &str) -> AppResult<()>;

    /// Check whether a document exists.
    async fn exists(&self, name: &str) -> AppResult<bool>;

    /// Classify how a document is rendered.
    fn render_mode(&self, name: &str) -> RenderMode {
        RenderMode::from_name(name)
    }
}

//! Document listing, viewing, and the create/update/delete flows.

use std::collections::HashSet;
use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_core::traits::DocumentStore;
use docshelf_core::types::RenderMode;

use super::render::markdown_to_html;
use super::validator::{NameRejection, validate_name};

/// A document as shown on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    /// Document name.
    pub name: String,
    /// How it renders when viewed.
    pub mode: RenderMode,
}

/// A document ready to be sent to the browser.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Document name.
    pub name: String,
    /// How the body was produced.
    pub mode: RenderMode,
    /// Raw bytes for plain text, HTML for markdown.
    pub body: Bytes,
}

impl RenderedDocument {
    /// The `Content-Type` header value for [`Self::body`].
    pub fn content_type(&self) -> &'static str {
        self.mode.content_type()
    }
}

/// Document operations over a [`DocumentStore`].
#[derive(Debug, Clone)]
pub struct DocumentService {
    store: Arc<dyn DocumentStore>,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// All documents, sorted by name.
    pub async fn list(&self) -> AppResult<Vec<DocumentSummary>> {
        let mut names = self.store.list().await?;
        names.sort();
        Ok(names
            .into_iter()
            .map(|name| DocumentSummary {
                mode: self.store.render_mode(&name),
                name,
            })
            .collect())
    }

    /// Read and render a document for viewing.
    ///
    /// Markdown is converted on every call.
    pub async fn view(&self, name: &str) -> AppResult<RenderedDocument> {
        let raw = self.store.read(name).await?;
        let mode = self.store.render_mode(name);

        let body = match mode {
            RenderMode::PlainText => raw,
            RenderMode::Markdown => {
                Bytes::from(markdown_to_html(&String::from_utf8_lossy(&raw)))
            }
        };

        Ok(RenderedDocument {
            name: name.to_string(),
            mode,
            body,
        })
    }

    /// Raw document text for the edit form.
    pub async fn source(&self, name: &str) -> AppResult<String> {
        let raw = self.store.read(name).await?;
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    /// Validate and create an empty document.
    ///
    /// `requested` is trimmed before validation. Rejections come back as
    /// `Validation` errors whose message is the rejection reason. Returns the
    /// trimmed name on success.
    pub async fn create(&self, requested: &str) -> AppResult<String> {
        let name = requested.trim();
        let existing: HashSet<String> = self.store.list().await?.into_iter().collect();

        validate_name(name, &existing).map_err(|reason| AppError::validation(reason.to_string()))?;

        self.store
            .create(name, Bytes::new())
            .await
            .map_err(|e| match e.kind {
                ErrorKind::Conflict => AppError::validation(NameRejection::NotUnique.to_string()),
                _ => e,
            })?;

        info!(name, "Document created");
        Ok(name.to_string())
    }

    /// Replace a document's content. The name is not validated.
    pub async fn update(&self, name: &str, content: &str) -> AppResult<()> {
        self.store
            .write(name, Bytes::copy_from_slice(content.as_bytes()))
            .await?;
        info!(name, bytes = content.len(), "Document updated");
        Ok(())
    }

    /// Delete a document. Missing documents yield `NotFound`.
    pub async fn delete(&self, name: &str) -> AppResult<()> {
        self.store.delete(name).await?;
        info!(name, "Document deleted");
        Ok(())
    }
}

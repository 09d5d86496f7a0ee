//! HTML views rendered with askama.
//!
//! Every view carries `username` and `flash`, which the shared layout uses
//! for the navigation bar and the one-shot messages.

use askama::Template;
use axum::response::Html;

use docshelf_core::error::AppError;
use docshelf_core::types::Flash;
use docshelf_service::document::DocumentSummary;

use crate::error::ApiResult;

/// A row on the index page.
#[derive(Debug, Clone)]
pub struct DocumentRow {
    /// Document name.
    pub name: String,
    /// Render mode label ("text" or "markdown").
    pub mode: String,
}

impl From<DocumentSummary> for DocumentRow {
    fn from(summary: DocumentSummary) -> Self {
        Self {
            mode: summary.mode.to_string(),
            name: summary.name,
        }
    }
}

/// Document list.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView {
    pub username: Option<String>,
    pub flash: Flash,
    pub documents: Vec<DocumentRow>,
}

/// Form for naming a new document.
#[derive(Template)]
#[template(path = "new_document.html")]
pub struct NewDocumentView {
    pub username: Option<String>,
    pub flash: Flash,
    /// Previously submitted name, kept after a rejection.
    pub name: String,
}

/// Editor for an existing document.
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditView {
    pub username: Option<String>,
    pub flash: Flash,
    pub name: String,
    pub content: String,
}

/// Sign-in form.
#[derive(Template)]
#[template(path = "signin.html")]
pub struct SignInView {
    pub username: Option<String>,
    pub flash: Flash,
    pub form_username: String,
}

/// Sign-up form.
#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignUpView {
    pub username: Option<String>,
    pub flash: Flash,
    pub form_username: String,
}

/// Render a view to an HTML response body.
pub fn render<T: Template>(view: &T) -> ApiResult<Html<String>> {
    view.render().map(Html).map_err(|e| {
        tracing::error!("Template rendering failed: {}", e);
        AppError::internal(format!("Template rendering failed: {e}")).into()
    })
}

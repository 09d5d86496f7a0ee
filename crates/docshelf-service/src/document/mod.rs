//! Document services.

pub mod render;
pub mod service;
pub mod validator;

pub use service::{DocumentService, DocumentSummary, RenderedDocument};
pub use validator::{NameRejection, validate_name};

//! Core traits defined in `docshelf-core` and implemented by other crates.

pub mod credential_store;
pub mod document_store;

pub use credential_store::CredentialStore;
pub use document_store::DocumentStore;

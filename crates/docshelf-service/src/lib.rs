//! # docshelf-service
//!
//! Business logic between the HTTP layer and the stores:
//!
//! - `document`: listing, rendering, and the create/update/delete flows,
//!   including document-name validation
//! - `account`: sign-in and sign-up against a credential store

pub mod account;
pub mod document;

pub use account::{AccountService, SignUpRejection, SignUpRequest};
pub use document::{DocumentService, NameRejection, RenderedDocument};

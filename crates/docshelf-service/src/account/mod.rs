//! Account services.

pub mod service;

pub use service::{AccountService, INVALID_CREDENTIALS, SignUpRejection, SignUpRequest};

//! # docshelf-auth
//!
//! Authentication and session handling for Docshelf.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `credentials`: YAML-file and in-memory credential stores
//! - `session`: server-side session storage and the signed-in gate

pub mod credentials;
pub mod password;
pub mod session;

pub use credentials::{MemoryCredentialStore, YamlCredentialStore};
pub use password::PasswordHasher;
pub use session::{GateDecision, SessionStore, require_signed_in};

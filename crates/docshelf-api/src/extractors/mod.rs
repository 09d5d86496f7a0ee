//! Custom Axum extractors.

pub mod session;

pub use session::{Session, SignedIn};

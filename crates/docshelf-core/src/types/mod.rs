//! Shared domain types.

pub mod document;
pub mod session;

pub use document::RenderMode;
pub use session::{Flash, SessionData};

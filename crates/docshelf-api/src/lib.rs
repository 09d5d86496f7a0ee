//! # docshelf-api
//!
//! HTTP layer for Docshelf built on Axum.
//!
//! Provides the HTML routes for listing, viewing, and editing documents,
//! the sign-in/sign-up flows, the session middleware and extractors, the
//! askama views, and the mapping from `AppError` to HTTP responses.

pub mod app;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod views;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;

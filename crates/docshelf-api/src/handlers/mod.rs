//! Route handlers.

pub mod auth;
pub mod document;
pub mod health;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// A `302 Found` redirect. `Redirect::to` would answer `303`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

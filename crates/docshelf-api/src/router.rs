//! Route definitions for the Docshelf HTTP server.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use std::path::Path;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let scripts = Path::new(&state.config.storage.public_dir).join("javascripts");

    Router::new()
        .merge(user_routes())
        .merge(health_routes())
        .merge(document_routes())
        .nest_service("/javascripts", ServeDir::new(scripts))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session::session_layer,
        ))
        .layer(RequestBodyLimitLayer::new(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Sign in, sign out, sign up
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/signin",
            get(handlers::auth::signin_form).post(handlers::auth::signin),
        )
        .route("/users/signout", post(handlers::auth::signout))
        .route(
            "/users/signup",
            get(handlers::auth::signup_form).post(handlers::auth::signup),
        )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Document list and CRUD. Static paths win over `/{name}`.
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::document::index))
        .route("/new_document", get(handlers::document::new_document))
        .route("/add_new_document", post(handlers::document::create_document))
        .route(
            "/{name}",
            get(handlers::document::view_document).post(handlers::document::update_document),
        )
        .route("/{name}/edit", get(handlers::document::edit_document))
        .route("/{name}/delete", post(handlers::document::delete_document))
}

//! `Session` and `SignedIn` extractors.
//!
//! The session middleware places a [`Session`] handle in the request
//! extensions; handlers read and mutate it, and the middleware persists the
//! result after the handler returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use docshelf_auth::session::{GateDecision, require_signed_in};
use docshelf_core::error::AppError;
use docshelf_core::types::{Flash, SessionData};

use crate::error::ApiError;
use crate::handlers::found;

/// Handle to the current request's session.
#[derive(Debug, Clone)]
pub struct Session {
    data: Arc<Mutex<SessionData>>,
    /// Set when the session id must change before it is persisted.
    rotate: Arc<AtomicBool>,
}

impl Session {
    /// Wrap loaded session data.
    pub fn new(data: SessionData) -> Self {
        Self {
            data: Arc::new(Mutex::new(data)),
            rotate: Arc::new(AtomicBool::new(false)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current data, for persisting.
    pub fn snapshot(&self) -> SessionData {
        self.lock().clone()
    }

    /// The signed-in username, if any.
    pub fn username(&self) -> Option<String> {
        self.lock().signed_in_user().map(str::to_string)
    }

    /// Mark the session as belonging to `username`.
    ///
    /// The id the caller held as a guest is retired: the middleware stores
    /// the data under a fresh id and issues a new cookie.
    pub fn sign_in(&self, username: &str) {
        self.lock().username = Some(username.to_string());
        self.rotate.store(true, Ordering::Relaxed);
    }

    /// Whether a sign-in asked for a new session id.
    pub fn rotation_requested(&self) -> bool {
        self.rotate.load(Ordering::Relaxed)
    }

    /// Forget the signed-in user, keeping flash values.
    pub fn sign_out(&self) {
        self.lock().username = None;
    }

    /// Queue an informational message for the next page.
    pub fn flash_message(&self, message: impl Into<String>) {
        self.lock().message = Some(message.into());
    }

    /// Take the pending flash values, clearing them.
    pub fn take_flash(&self) -> Flash {
        self.lock().take_flash()
    }

    /// Run the signed-in gate, recording its flash message on refusal.
    pub fn require_signed_in(&self) -> GateDecision {
        let mut data = self.lock();
        let decision = require_signed_in(&data);
        if let GateDecision::Unauthorized(denied) = &decision {
            denied.apply(&mut data);
        }
        decision
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::internal("Session middleware is not installed").into())
    }
}

/// The signed-in username; guests are redirected with a flash message.
///
/// Because extractors run before the handler body, a guest never reaches
/// any code that could mutate a document.
#[derive(Debug, Clone)]
pub struct SignedIn(pub String);

impl<S> FromRequestParts<S> for SignedIn
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match session.require_signed_in() {
            GateDecision::Authorized(username) => Ok(SignedIn(username)),
            GateDecision::Unauthorized(denied) => {
                debug!(
                    method = %parts.method,
                    path = %parts.uri.path(),
                    "Guest refused at sign-in gate"
                );
                Err(found(denied.redirect_to))
            }
        }
    }
}

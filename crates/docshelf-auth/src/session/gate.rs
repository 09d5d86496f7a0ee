//! The signed-in check that guards every mutating route.

use docshelf_core::types::SessionData;

/// Flash message set when a guest reaches a guarded route.
pub const SIGN_IN_REQUIRED: &str = "You must be signed in to do that.";

/// Outcome of [`require_signed_in`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The session belongs to this signed-in user.
    Authorized(String),
    /// The caller is a guest; apply the side effect and stop.
    Unauthorized(Unauthorized),
}

/// What a route must do for a guest: set the flash and redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unauthorized {
    /// Flash message for the next page.
    pub message: &'static str,
    /// Where to send the caller.
    pub redirect_to: &'static str,
}

impl Unauthorized {
    /// Record the flash message on the session.
    pub fn apply(&self, session: &mut SessionData) {
        session.message = Some(self.message.to_string());
    }
}

/// Decide whether the session's owner may mutate documents.
///
/// Authorized iff the session carries a non-empty username.
pub fn require_signed_in(session: &SessionData) -> GateDecision {
    match session.signed_in_user() {
        Some(username) => GateDecision::Authorized(username.to_string()),
        None => GateDecision::Unauthorized(Unauthorized {
            message: SIGN_IN_REQUIRED,
            redirect_to: "/",
        }),
    }
}

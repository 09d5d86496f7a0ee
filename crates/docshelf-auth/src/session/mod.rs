//! Server-side sessions and the signed-in gate.

pub mod gate;
pub mod store;

pub use gate::{GateDecision, SIGN_IN_REQUIRED, Unauthorized, require_signed_in};
pub use store::SessionStore;

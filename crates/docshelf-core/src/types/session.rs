//! Per-browser session state.

use serde::{Deserialize, Serialize};

/// Everything Docshelf keeps for one browser between requests.
///
/// `message` and `error` are one-shot flash values: they are shown by the
/// next rendered page and cleared by [`SessionData::take_flash`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// The signed-in username, if any.
    pub username: Option<String>,
    /// Informational flash message.
    pub message: Option<String>,
    /// Error flash message.
    pub error: Option<String>,
}

/// Flash values taken out of a session for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    /// Informational message.
    pub message: Option<String>,
    /// Error message.
    pub error: Option<String>,
}

impl Flash {
    /// A flash holding only an error.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            message: None,
            error: Some(error.into()),
        }
    }
}

impl SessionData {
    /// The signed-in username, ignoring empty values.
    pub fn signed_in_user(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }

    /// Remove and return the flash values.
    pub fn take_flash(&mut self) -> Flash {
        Flash {
            message: self.message.take(),
            error: self.error.take(),
        }
    }

    /// Whether there is nothing worth persisting.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.message.is_none() && self.error.is_none()
    }
}

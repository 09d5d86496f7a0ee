//! Sign-in and sign-up against a credential store.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_core::traits::CredentialStore;

/// Message shown for any failed sign-in.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";

/// Form input for creating an account.
#[derive(Debug, Clone, Default)]
pub struct SignUpRequest {
    /// Requested username.
    pub username: String,
    /// Chosen password.
    pub password: String,
    /// Password typed a second time.
    pub password_confirmation: String,
}

/// Why a sign-up was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignUpRejection {
    /// Username left blank.
    #[error("A username is required.")]
    MissingUsername,
    /// Password left blank.
    #[error("A password is required.")]
    MissingPassword,
    /// Password and confirmation differ.
    #[error("The passwords do not match.")]
    PasswordMismatch,
    /// Username already registered.
    #[error("That username is already taken.")]
    UsernameTaken,
}

impl SignUpRequest {
    /// Form-level checks, in order; the first failure wins.
    pub fn check(&self) -> Result<(), SignUpRejection> {
        if self.username.is_empty() {
            return Err(SignUpRejection::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(SignUpRejection::MissingPassword);
        }
        if self.password != self.password_confirmation {
            return Err(SignUpRejection::PasswordMismatch);
        }
        Ok(())
    }
}

/// Account operations over a [`CredentialStore`].
#[derive(Debug, Clone)]
pub struct AccountService {
    credentials: Arc<dyn CredentialStore>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
        Self { credentials }
    }

    /// Check a username/password pair and return the stored username.
    ///
    /// The username is trimmed the same way sign-up trims it. Failure is an
    /// `Authentication` error carrying [`INVALID_CREDENTIALS`], whether the
    /// user is unknown or the password is wrong.
    pub async fn sign_in(&self, username: &str, password: &str) -> AppResult<String> {
        let username = username.trim();
        if self.credentials.verify(username, password).await? {
            info!(username, "User signed in");
            Ok(username.to_string())
        } else {
            warn!(username, "Failed sign-in attempt");
            Err(AppError::authentication(INVALID_CREDENTIALS))
        }
    }

    /// Register a new account.
    ///
    /// Rejections are `Validation` errors whose message is the reason.
    pub async fn sign_up(&self, request: &SignUpRequest) -> AppResult<()> {
        let username = request.username.trim();
        let request = SignUpRequest {
            username: username.to_string(),
            ..request.clone()
        };
        request
            .check()
            .map_err(|reason| AppError::validation(reason.to_string()))?;

        self.credentials
            .create(username, &request.password)
            .await
            .map_err(|e| match e.kind {
                ErrorKind::Conflict => {
                    AppError::validation(SignUpRejection::UsernameTaken.to_string())
                }
                _ => e,
            })?;

        info!(username, "Account created");
        Ok(())
    }

    /// Whether a username is registered.
    pub async fn exists(&self, username: &str) -> AppResult<bool> {
        self.credentials.exists(username).await
    }

    /// All registered usernames.
    pub async fn usernames(&self) -> AppResult<Vec<String>> {
        self.credentials.usernames().await
    }
}

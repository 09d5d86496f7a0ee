//! Turns sign-up passwords into the values the credential stores keep.
//!
//! A stored credential is the Argon2id PHC string produced by
//! [`PasswordHasher::hash`], kept byte for byte. In `users.yml` it is the
//! value under the username key:
//!
//! ```yaml
//! bumblebee: $argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>
//! ```
//!
//! The salt and cost parameters travel inside that string, so
//! [`PasswordHasher::verify`] needs nothing else to check a sign-in.
//! Anything in the file that does not parse as PHC (a plaintext password
//! typed in by hand, for example) is a broken store and surfaces as an
//! internal error instead of a failed sign-in.

use argon2::Argon2;
use argon2::password_hash::{
    self, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString, rand_core::OsRng,
};

use docshelf_core::error::AppError;

/// Prefix every stored credential starts with.
pub const STORED_PREFIX: &str = "$argon2id$";

/// Hashes new passwords and checks sign-in attempts against stored values.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// The value to persist for `password`, salted fresh on every call.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|phc| phc.to_string())
            .map_err(|e| AppError::internal(format!("Could not hash password: {e}")))
    }

    /// Whether `password` is the one `stored` was made from.
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        let phc = PasswordHash::new(stored)
            .map_err(|e| AppError::internal(format!("Stored credential is not a PHC string: {e}")))?;

        match argon2().verify_password(password.as_bytes(), &phc) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Could not check password: {e}"
            ))),
        }
    }
}

fn argon2() -> Argon2<'static> {
    Argon2::default()
}

//! Password hashing.

pub mod hasher;

pub use hasher::{PasswordHasher, STORED_PREFIX};

//! # docshelf-core
//!
//! Core crate for Docshelf. Contains the storage traits, configuration
//! schemas, document and session types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Docshelf crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

//! Convenience result type alias for Docshelf.

use crate::error::AppError;

/// A specialized `Result` type for Docshelf operations.
pub type AppResult<T> = Result<T, AppError>;

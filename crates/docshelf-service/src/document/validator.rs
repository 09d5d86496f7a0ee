//! Rules for naming a new document.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// ASCII letters, a dot, then a two- or three-letter ASCII extension.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]+\.[a-zA-Z]{2,3}$").expect("document name pattern is valid")
});

/// Longest accepted document name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Why a candidate document name was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameRejection {
    /// A document with this exact name already exists.
    #[error("The document name must be unique.")]
    NotUnique,
    /// The name is not letters, a dot, and a 2–3 letter extension.
    #[error("The document name must contain an extension.")]
    MissingExtension,
    /// The name is empty or longer than [`MAX_NAME_LENGTH`].
    #[error("The document name must be between 1 and 100 characters.")]
    InvalidLength,
}

/// Check a candidate name against the existing names.
///
/// Rules are applied in order and the first failure wins. Callers trim
/// surrounding whitespace first. The length rule is kept even though the
/// pattern already excludes empty names.
pub fn validate_name(candidate: &str, existing: &HashSet<String>) -> Result<(), NameRejection> {
    if existing.contains(candidate) {
        return Err(NameRejection::NotUnique);
    }
    if !NAME_PATTERN.is_match(candidate) {
        return Err(NameRejection::MissingExtension);
    }
    if !(1..=MAX_NAME_LENGTH).contains(&candidate.chars().count()) {
        return Err(NameRejection::InvalidLength);
    }
    Ok(())
}

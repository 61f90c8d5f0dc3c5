//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The term is empty after trimming.
    EmptyTerm,

    /// A property filter was built with a blank key.
    MissingPropertyKey(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTerm => write!(f, "Search term cannot be empty"),
            Self::MissingPropertyKey(value) => {
                write!(f, "Property filter for value '{}' has no key", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

//! Validation error types

use std::fmt;

/// Validation error for incoming resource payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Request body is not a JSON object
    NotAnObject,

    /// Required field is absent
    Missing { field: &'static str },

    /// Field is present but not a string
    NotAString { field: &'static str },

    /// Field is empty (or whitespace only)
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Body could not be parsed as JSON
    MalformedJson { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "request body must be a JSON object"),
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::NotAString { field } => write!(f, "{} must be a string", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::MalformedJson { reason } => write!(f, "invalid JSON body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

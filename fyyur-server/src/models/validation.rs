//! Validation error types

use std::fmt;

/// Validation error for submitted forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field was not submitted at all
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Value doesn't parse into the expected type
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl ValidationError {
    /// Name of the offending form field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::Empty { field } | Self::InvalidFormat { field, .. } => {
                *field
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "artist_id",
            reason: "must be a positive integer",
        };
        assert_eq!(err.to_string(), "artist_id: must be a positive integer");
        assert_eq!(err.field(), "artist_id");
    }

    #[test]
    fn missing_display() {
        let err = ValidationError::Missing { field: "start_time" };
        assert_eq!(err.to_string(), "start_time is required");
    }
}

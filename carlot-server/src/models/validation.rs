//! Validation error types

use std::fmt;

/// Input rejected before it reaches a repository
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Path segment missing or unreadable
    Missing { field: &'static str },

    /// Identifier is not a positive integer
    InvalidId { field: &'static str, value: String },

    /// Text longer than its column allows
    TooLong { field: &'static str, max: usize },

    /// Request body is not the JSON the route expects
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} não informado", field),
            Self::InvalidId { field, value } => write!(
                f,
                "{} inválido: '{}'. Por favor, forneça um ID válido.",
                field, value
            ),
            Self::TooLong { field, max } => {
                write!(f, "{} excede o tamanho máximo de {} caracteres", field, max)
            }
            Self::MalformedBody { reason } => {
                write!(f, "Corpo da requisição inválido: {}", reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse a path identifier, accepting only positive integers.
pub fn parse_id(field: &'static str, raw: &str) -> Result<i32, ValidationError> {
    match raw.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidId {
            field,
            value: raw.to_owned(),
        }),
    }
}

/// Reject text with more than `max` characters.
pub fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

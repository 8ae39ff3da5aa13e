//! Unified error types for the domain layer
//!
//! Provides a common error type for domain operations so the client crate can
//! tell a programming error (an id that is not in the local document) apart
//! from transport failures.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A referenced nested object is missing from the local copy of its parent.
    ///
    /// This is an invariant violation in the caller, not a recoverable
    /// condition: the UI only offers ids it has just rendered.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Entity name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a parse error for unknown enum values and the like
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("DetailSection", "sec-42");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "DetailSection not found: sec-42");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown entity kind: dragon");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(!err.is_not_found());
    }
}

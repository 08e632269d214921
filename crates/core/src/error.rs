//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error taxonomy.
///
/// `NotFound` and `Validation` are expected, recoverable-by-caller outcomes.
/// `Integrity` is a persistence constraint violation (conflict, resubmit
/// corrected input). `Structural` indicates a defect in the registered type
/// universe, not bad input, and is logged for operator diagnosis.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Unknown model name, or record absent / out of tenant scope.
    #[error("not found")]
    NotFound,

    /// A payload failed schema coercion. Carries the per-field cause.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A persistence-layer constraint was violated (e.g. unique column).
    #[error("integrity violation: {0}")]
    Integrity(String),

    /// Introspection or serialization failed for a registered type.
    #[error("structural error on model '{model}': {cause}")]
    Structural { model: String, cause: String },

    /// Authorization failure at the domain boundary.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn integrity(msg: impl Into<String>) -> Self {
        Self::Integrity(msg.into())
    }

    pub fn structural(model: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::Structural {
            model: model.into(),
            cause: cause.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

//! Domain error model.

use thiserror::Error;

use crate::id::Sku;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Ineligible
/// allocation attempts against a single batch are not errors; only the
/// allocator surfaces `OutOfStock`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No batch could satisfy the requested line.
    #[error("out of stock for sku {sku}")]
    OutOfStock { sku: Sku },

    /// A value failed validation (e.g. a malformed batch record).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A conflict occurred (e.g. a batch reference registered twice).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn out_of_stock(sku: impl Into<Sku>) -> Self {
        Self::OutOfStock { sku: sku.into() }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

//! The module contains the error the ledger can throw.
//!
//! Most variants carry a human-readable detail string. The errors are:
//!
//! - [`KeyNotFound`] thrown when an item is not found.
//! - [`OwnershipViolation`] thrown when a team mutation would break the
//!   one-owner rule.
//!
//!  [`KeyNotFound`]: LedgerError::KeyNotFound
//!  [`OwnershipViolation`]: LedgerError::OwnershipViolation
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid kind: {0}")]
    InvalidKind(String),
    #[error("Invalid role: {0}")]
    InvalidRole(String),
    #[error("Ownership violation: {0}")]
    OwnershipViolation(String),
    #[error("No user is signed in")]
    NotSignedIn,
    #[error("Invalid import: {0}")]
    InvalidImport(String),
    #[error("Persistence error: {0}")]
    Persistence(String),
}

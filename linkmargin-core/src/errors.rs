//! Error types for link budget calculations.
//!
//! This module provides a unified error type [`LinkError`] covering the ways a
//! single link budget computation can fail: a log-domain conversion fed a
//! non-positive value, a required field left empty, or a catalog lookup with a
//! name that is not in the reference tables.
//!
//! # Error Categories
//!
//! | Variant | Use Case | Caller action |
//! |---------|----------|---------------|
//! | [`Domain`](LinkError::Domain) | Non-positive or non-finite input to a dB/geometry formula | Report the field as invalid |
//! | [`MissingField`](LinkError::MissingField) | Required input absent at compute time | Ask for the named field |
//! | [`UnknownKey`](LinkError::UnknownKey) | Body or coding-scheme name not in the catalog | Caller bug, names come from closed lists |
//!
//! A value that simply cannot be derived yet (uplink frequency before the
//! turn-around ratio is entered, noise temperature below the lowest band) is
//! not an error at all; see [`Derived`](crate::units::Derived).
//!
//! # Usage
//!
//! Most functions return [`LinkResult<T>`], which is `Result<T, LinkError>`.
//! Use the constructor methods for consistent error creation:
//!
//! ```
//! use linkmargin_core::{DomainErrorKind, LinkError};
//!
//! fn checked_inverse(x: f64) -> Result<f64, LinkError> {
//!     if x == 0.0 {
//!         return Err(LinkError::domain(
//!             "checked_inverse",
//!             DomainErrorKind::DivisionByZero,
//!             "argument is zero",
//!         ));
//!     }
//!     Ok(1.0 / x)
//! }
//! ```

use thiserror::Error;

/// Classification of numeric domain failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainErrorKind {
    /// Zero or negative value where a strictly positive one is required.
    NonPositive,
    /// Input or result is NaN or infinite.
    NotFinite,
    /// A divisor or distance collapsed to zero.
    DivisionByZero,
    /// Value outside its physical range (e.g. efficiency above 1).
    OutOfRange,
}

/// Unified error type for link budget calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkError {
    /// A log-domain conversion or geometric formula received an invalid value.
    #[error("Invalid input for {quantity} ({kind:?}): {message}")]
    Domain {
        quantity: String,
        kind: DomainErrorKind,
        message: String,
    },

    /// A field needed for this computation was not supplied.
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A name was looked up in a reference table that does not contain it.
    #[error("Unknown {table}: {key}")]
    UnknownKey { table: String, key: String },
}

/// Convenience alias for `Result<T, LinkError>`.
pub type LinkResult<T> = Result<T, LinkError>;

impl LinkError {
    /// Creates a [`Domain`](Self::Domain) error.
    pub fn domain(quantity: &str, kind: DomainErrorKind, reason: &str) -> Self {
        Self::Domain {
            quantity: quantity.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`MissingField`](Self::MissingField) error.
    pub fn missing_field(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }

    /// Creates an [`UnknownKey`](Self::UnknownKey) error.
    pub fn unknown_key(table: &str, key: &str) -> Self {
        Self::UnknownKey {
            table: table.to_string(),
            key: key.to_string(),
        }
    }

    /// Relabels a [`Domain`](Self::Domain) error with the budget field it came from.
    ///
    /// Other variants already name their subject and pass through unchanged.
    pub fn with_quantity(self, quantity: &str) -> Self {
        match self {
            Self::Domain { kind, message, .. } => Self::Domain {
                quantity: quantity.to_string(),
                kind,
                message,
            },
            other => other,
        }
    }

    /// Name of the offending field or key, when the error carries one.
    pub fn subject(&self) -> &str {
        match self {
            Self::Domain { quantity, .. } => quantity,
            Self::MissingField { field } => field,
            Self::UnknownKey { key, .. } => key,
        }
    }
}

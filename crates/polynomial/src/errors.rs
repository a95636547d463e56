// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial operations.
///
/// Addition, subtraction, multiplication, evaluation and composition are total,
/// so only division and term parsing can fail.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// Division by the zero polynomial
    #[error("Division by zero polynomial")]
    DivisionByZero,

    /// A term could not be read from text
    #[error("Invalid term '{input}': {reason}")]
    InvalidTerm { input: String, reason: String },

    /// Parse error for a BigInt coefficient
    #[error("Parse error: {0}")]
    ParseError(#[from] num_bigint::ParseBigIntError),
}

/// Result type alias for polynomial operations
pub type PolynomialResult<T> = Result<T, PolynomialError>;

impl PolynomialError {
    /// Create an invalid term error for the given input
    pub fn invalid_term(input: impl Into<String>, reason: impl Into<String>) -> Self {
        PolynomialError::InvalidTerm {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

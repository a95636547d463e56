// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Single-variable polynomials with integer coefficients in a sparse representation.
//!
//! ## Features
//!
//! - Uses `num-bigint` for coefficient representation, so products and compositions
//!   never overflow.
//! - Sparse term store: only non-zero `(coefficient, exponent)` terms are kept, highest
//!   exponent first.
//! - Arithmetic: addition and subtraction by a linear merge, multiplication, Euclidean
//!   division with integer-truncated coefficient steps.
//! - Evaluation by the remainder theorem, and composition by full substitution.
//! - Serialization: Optional serde support for polynomial serialization with bincode integration.
//!
//! ## Example
//!
//! ```
//! use intpoly_polynomial::Polynomial;
//!
//! let p = Polynomial::new().with_term(1, 2).with_term(-3, 1).with_term(1, 0);
//! let q = Polynomial::new().with_term(1, 1).with_term(-1, 0);
//!
//! let division = p.div(&q).unwrap();
//! assert_eq!(&(&division.quotient * &q) + &division.remainder, p);
//! assert_eq!(p.evaluate(1), p.compose_eval(1));
//! ```

pub mod division;
pub mod errors;
pub mod evaluation;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use division::Division;
pub use errors::{PolynomialError, PolynomialResult};
pub use polynomial::Polynomial;
pub use term::Term;

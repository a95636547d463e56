// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! A single `coeff * x^exp` term.

use crate::errors::{PolynomialError, PolynomialResult};
use num_bigint::BigInt;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A `(coefficient, exponent)` pair.
///
/// A term on its own may carry a zero coefficient; a [`Polynomial`](crate::Polynomial)
/// never stores one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    pub(crate) coeff: BigInt,
    pub(crate) exp: usize,
}

impl Term {
    /// Creates a new term `coeff * x^exp`.
    pub fn new(coeff: impl Into<BigInt>, exp: usize) -> Self {
        Self {
            coeff: coeff.into(),
            exp,
        }
    }

    /// Returns the coefficient.
    pub fn coeff(&self) -> &BigInt {
        &self.coeff
    }

    /// Returns the exponent.
    pub fn exp(&self) -> usize {
        self.exp
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x^{}", self.coeff, self.exp)
    }
}

/// Reads a term written as `<coeff>:<exp>`, e.g. `-3:2` for `-3x^2`.
impl FromStr for Term {
    type Err = PolynomialError;

    fn from_str(s: &str) -> PolynomialResult<Self> {
        let input = s.trim();
        let (coeff, exp) = input
            .split_once(':')
            .ok_or_else(|| PolynomialError::invalid_term(input, "expected <coeff>:<exp>"))?;

        let coeff: BigInt = coeff.trim().parse()?;
        let exp = exp
            .trim()
            .parse::<usize>()
            .map_err(|e| PolynomialError::invalid_term(input, format!("bad exponent: {e}")))?;

        Ok(Term::new(coeff, exp))
    }
}

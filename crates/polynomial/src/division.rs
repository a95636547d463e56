// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Euclidean long division over integer coefficients.
//!
//! Each step divides the remainder's leading coefficient by the divisor's leading
//! coefficient with truncating integer division. For divisors with leading
//! coefficient `±1` every step is exact and the usual bound `deg(r) < deg(d)` holds.
//! Otherwise a step may drop a fractional part; the result is then flagged as
//! truncated. In both cases `dividend == quotient * divisor + remainder` holds,
//! because the remainder is always the dividend minus exactly what was subtracted.

use crate::errors::{PolynomialError, PolynomialResult};
use crate::polynomial::Polynomial;
use crate::term::Term;
use num_integer::Integer;
use num_traits::Zero;
use std::ops::{Div, Rem};
use tracing::{debug, trace};

/// Quotient and remainder of a polynomial division.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Division {
    pub quotient: Polynomial,
    pub remainder: Polynomial,
    /// Set when some step's coefficient division was not exact.
    pub truncated: bool,
}

impl Division {
    /// Returns true when no step dropped a fractional part.
    pub fn is_exact(&self) -> bool {
        !self.truncated
    }

    /// Splits into `(quotient, remainder)`.
    pub fn into_parts(self) -> (Polynomial, Polynomial) {
        (self.quotient, self.remainder)
    }
}

impl Polynomial {
    /// Divides one polynomial by another, returning the quotient and remainder.
    ///
    /// # Arguments
    ///
    /// * `divisor` - A reference to the divisor polynomial.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if the divisor is zero.
    pub fn div(&self, divisor: &Polynomial) -> PolynomialResult<Division> {
        let lead = divisor
            .leading_term()
            .ok_or(PolynomialError::DivisionByZero)?;
        Ok(self.long_division(divisor, lead))
    }

    /// Returns only the quotient of [`div`](Self::div).
    pub fn quotient(&self, divisor: &Polynomial) -> PolynomialResult<Polynomial> {
        Ok(self.div(divisor)?.quotient)
    }

    /// Returns only the remainder of [`div`](Self::div).
    pub fn remainder(&self, divisor: &Polynomial) -> PolynomialResult<Polynomial> {
        Ok(self.div(divisor)?.remainder)
    }

    /// `lead` must be the leading term of `divisor`.
    pub(crate) fn long_division(&self, divisor: &Polynomial, lead: &Term) -> Division {
        let mut quotient = Polynomial::new();
        let mut remainder = self.clone();
        let mut truncated = false;

        while let Some(top) = remainder.leading_term() {
            if top.exp < lead.exp {
                break;
            }

            let (coeff, dropped) = top.coeff.div_rem(&lead.coeff);
            let exp = top.exp - lead.exp;

            if !dropped.is_zero() {
                truncated = true;
                debug!(
                    numerator = %top.coeff,
                    denominator = %lead.coeff,
                    exp = top.exp,
                    "inexact coefficient division, quotient term truncated"
                );
            }

            // Nothing left to subtract at this exponent; the remainder keeps its degree.
            if coeff.is_zero() {
                debug!(
                    degree = top.exp,
                    "leading term not divisible by divisor, stopping division"
                );
                break;
            }

            trace!(%coeff, exp, "division step");

            let mut step = divisor.clone();
            step.multiply_by_term(coeff.clone(), exp);
            quotient.add_term(coeff, exp);
            remainder -= &step;
        }

        Division {
            quotient,
            remainder,
            truncated,
        }
    }
}

impl Div for &Polynomial {
    type Output = PolynomialResult<Polynomial>;

    fn div(self, rhs: Self) -> Self::Output {
        self.quotient(rhs)
    }
}

impl Rem for &Polynomial {
    type Output = PolynomialResult<Polynomial>;

    fn rem(self, rhs: Self) -> Self::Output {
        self.remainder(rhs)
    }
}

// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Sparse polynomial arithmetic implementation.

use crate::term::Term;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single-variable polynomial with integer coefficients, stored sparsely.
///
/// Terms are kept in strictly decreasing order of exponent, no two terms share an
/// exponent and no stored coefficient is zero. An empty term list is the zero
/// polynomial. Every operation below preserves these invariants.
///
/// `Clone` is a deep copy: two polynomials never share terms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Term>", into = "Vec<Term>"))]
pub struct Polynomial {
    /// Terms in descending order of exponent (highest degree first).
    pub(crate) terms: Vec<Term>,
}

/// Which way the merge engine combines the right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MergeOp {
    Add,
    Sub,
}

impl MergeOp {
    fn combine(self, acc: &mut BigInt, rhs: &BigInt) {
        match self {
            MergeOp::Add => *acc += rhs,
            MergeOp::Sub => *acc -= rhs,
        }
    }

    fn lift(self, rhs: &BigInt) -> BigInt {
        match self {
            MergeOp::Add => rhs.clone(),
            MergeOp::Sub => -rhs,
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.terms.iter();
        let Some(first) = terms.next() else {
            return write!(f, "0");
        };

        write!(f, "{first}")?;
        for term in terms {
            let sign = if term.coeff.is_negative() { '-' } else { '+' };
            write!(f, " {sign} {}x^{}", term.coeff.abs(), term.exp)?;
        }

        Ok(())
    }
}

impl Polynomial {
    /// Creates the zero polynomial.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates a constant polynomial. A zero constant gives the zero polynomial.
    pub fn constant(constant: impl Into<BigInt>) -> Self {
        Self::monomial(constant, 0)
    }

    /// Creates the single-term polynomial `coeff * x^exp`.
    pub fn monomial(coeff: impl Into<BigInt>, exp: usize) -> Self {
        let mut poly = Self::new();
        poly.add_term(coeff, exp);
        poly
    }

    /// Returns the terms, highest exponent first.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of stored (non-zero) terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Same as [`is_zero`](Self::is_zero).
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the degree of the polynomial, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.terms.first().map(|t| t.exp)
    }

    /// Returns the highest-exponent term.
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Returns the leading coefficient of the polynomial.
    pub fn leading_coefficient(&self) -> Option<&BigInt> {
        self.terms.first().map(|t| &t.coeff)
    }

    /// Returns the coefficient of `x^0`, zero if there is none.
    pub fn constant_term(&self) -> BigInt {
        match self.terms.last() {
            Some(term) if term.exp == 0 => term.coeff.clone(),
            _ => BigInt::zero(),
        }
    }

    /// Adds `coeff * x^exp` to the polynomial.
    ///
    /// Combines with an existing term of the same exponent and removes it if the
    /// sum is zero. Returns `self` so insertions can be chained:
    ///
    /// ```
    /// # use intpoly_polynomial::Polynomial;
    /// let mut p = Polynomial::new();
    /// p.add_term(1, 2).add_term(-3, 1).add_term(1, 0);
    /// assert_eq!(p.to_string(), "1x^2 - 3x^1 + 1x^0");
    /// ```
    pub fn add_term(&mut self, coeff: impl Into<BigInt>, exp: usize) -> &mut Self {
        let coeff = coeff.into();
        if coeff.is_zero() {
            return self;
        }

        // Descending order, so a larger stored exponent sorts "before" `exp`.
        match self.terms.binary_search_by(|t| exp.cmp(&t.exp)) {
            Ok(i) => {
                self.terms[i].coeff += coeff;
                if self.terms[i].coeff.is_zero() {
                    self.terms.remove(i);
                }
            }
            Err(i) => self.terms.insert(i, Term { coeff, exp }),
        }

        self
    }

    /// Owned variant of [`add_term`](Self::add_term) for building values inline.
    pub fn with_term(mut self, coeff: impl Into<BigInt>, exp: usize) -> Self {
        self.add_term(coeff, exp);
        self
    }

    /// Resets the polynomial to zero.
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Multiplies the polynomial by the monomial `coeff * x^exp` in place.
    ///
    /// A zero `coeff` annihilates every term and leaves the zero polynomial.
    pub fn multiply_by_term(&mut self, coeff: impl Into<BigInt>, exp: usize) -> &mut Self {
        let coeff = coeff.into();
        if coeff.is_zero() {
            self.clear();
            return self;
        }

        for term in &mut self.terms {
            term.coeff *= &coeff;
            term.exp += exp;
        }

        self
    }

    /// Merges `other` into `self`, adding or subtracting its coefficients.
    ///
    /// Both term lists are sorted by descending exponent, so this is a single
    /// two-pointer pass over them.
    fn merge(&mut self, other: &Polynomial, op: MergeOp) {
        if other.is_zero() {
            return;
        }

        let lhs = std::mem::take(&mut self.terms);
        let mut merged = Vec::with_capacity(lhs.len() + other.terms.len());
        let mut left = lhs.into_iter().peekable();
        let mut right = other.terms.iter().peekable();

        loop {
            let ordering = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => l.exp.cmp(&r.exp),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => break,
            };

            match ordering {
                Ordering::Greater => merged.extend(left.next()),
                Ordering::Less => {
                    if let Some(r) = right.next() {
                        merged.push(Term {
                            coeff: op.lift(&r.coeff),
                            exp: r.exp,
                        });
                    }
                }
                Ordering::Equal => {
                    if let (Some(mut l), Some(r)) = (left.next(), right.next()) {
                        op.combine(&mut l.coeff, &r.coeff);
                        if !l.coeff.is_zero() {
                            merged.push(l);
                        }
                    }
                }
            }
        }

        self.terms = merged;
    }
}

impl From<Vec<Term>> for Polynomial {
    fn from(terms: Vec<Term>) -> Self {
        terms.into_iter().collect()
    }
}

impl From<Polynomial> for Vec<Term> {
    fn from(poly: Polynomial) -> Self {
        poly.terms
    }
}

/// Collects terms in any order, merging equal exponents and dropping zeros.
impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        let mut poly = Polynomial::new();
        for term in iter {
            poly.add_term(term.coeff, term.exp);
        }
        poly
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        self.merge(rhs, MergeOp::Add);
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Polynomial) {
        *self += &rhs;
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        self.merge(rhs, MergeOp::Sub);
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, rhs: Polynomial) {
        *self -= &rhs;
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        let mut sum = self.clone();
        sum += rhs;
        sum
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(mut self, rhs: Polynomial) -> Polynomial {
        self += &rhs;
        self
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Polynomial {
        let mut diff = self.clone();
        diff -= rhs;
        diff
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(mut self, rhs: Polynomial) -> Polynomial {
        self -= &rhs;
        self
    }
}

/// Distributes every term of `self` over `rhs`: scale a copy of `rhs` by the term,
/// then merge it into the running product.
impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        let mut product = Polynomial::new();

        for term in &self.terms {
            let mut scaled = rhs.clone();
            scaled.multiply_by_term(term.coeff.clone(), term.exp);
            product += &scaled;
        }

        product
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Polynomial {
    fn mul_assign(&mut self, rhs: Polynomial) {
        *self *= &rhs;
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -self.clone()
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(mut self) -> Polynomial {
        for term in &mut self.terms {
            term.coeff = -std::mem::take(&mut term.coeff);
        }
        self
    }
}

// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Point evaluation and functional composition.

use crate::polynomial::Polynomial;
use crate::term::Term;
use num_bigint::BigInt;

impl Polynomial {
    /// Evaluates the polynomial at `x` using the remainder theorem.
    ///
    /// The remainder of dividing by the monic `x - n` is the constant `P(n)`. Every
    /// division step has a leading coefficient of 1, so the result is exact.
    pub fn evaluate(&self, x: impl Into<BigInt>) -> BigInt {
        let point: BigInt = x.into();
        let lead = Term::new(1, 1);
        let divisor = Polynomial::from(vec![lead.clone(), Term::new(-point, 0)]);

        self.long_division(&divisor, &lead)
            .remainder
            .constant_term()
    }

    /// Substitutes `other` for the variable: returns `self(other(x))`.
    ///
    /// Each term `c * x^e` becomes `c * other^e` by `e` repeated multiplications.
    pub fn compose(&self, other: &Polynomial) -> Polynomial {
        let mut result = Polynomial::new();

        for term in &self.terms {
            let mut power = Polynomial::constant(term.coeff.clone());
            for _ in 0..term.exp {
                power *= other;
            }
            result += &power;
        }

        result
    }

    /// Evaluates at `x` by composing with the constant polynomial `x`.
    ///
    /// Agrees with [`evaluate`](Self::evaluate) but goes through full substitution.
    pub fn compose_eval(&self, x: impl Into<BigInt>) -> BigInt {
        self.compose(&Polynomial::constant(x)).constant_term()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p1() -> Polynomial {
        Polynomial::new()
            .with_term(2, 4)
            .with_term(-3, 3)
            .with_term(4, 2)
            .with_term(-5, 1)
            .with_term(6, 0)
    }

    fn p2() -> Polynomial {
        Polynomial::new()
            .with_term(1, 2)
            .with_term(-3, 1)
            .with_term(1, 0)
    }

    #[test]
    fn test_polynomial_evaluation() {
        assert_eq!(p1().evaluate(2), BigInt::from(20));
        assert_eq!(p1().evaluate(0), BigInt::from(6));
        assert_eq!(p1().evaluate(-1), BigInt::from(20));
        assert_eq!(p2().evaluate(1), BigInt::from(-1));
    }

    #[test]
    fn test_evaluate_zero_polynomial() {
        assert_eq!(Polynomial::new().evaluate(17), BigInt::from(0));
        assert_eq!(Polynomial::new().compose_eval(17), BigInt::from(0));
    }

    #[test]
    fn test_evaluate_root_gives_zero() {
        // (x - 2)(x + 3)
        let poly = Polynomial::new()
            .with_term(1, 2)
            .with_term(1, 1)
            .with_term(-6, 0);
        assert_eq!(poly.evaluate(2), BigInt::from(0));
        assert_eq!(poly.evaluate(-3), BigInt::from(0));
    }

    #[test]
    fn test_evaluate_sparse_high_degree() {
        let poly = Polynomial::new().with_term(1, 40).with_term(-1, 0);
        assert_eq!(poly.evaluate(2), BigInt::from((1i64 << 40) - 1));
        assert_eq!(poly.evaluate(-1), BigInt::from(0));
    }

    #[test]
    fn test_compose_eval() {
        assert_eq!(p2().compose_eval(1), BigInt::from(-1));
        assert_eq!(p1().compose_eval(2), p1().evaluate(2));
        assert_eq!(p1().compose_eval(-3), p1().evaluate(-3));
    }

    #[test]
    fn test_compose() {
        // p(x) = x^2 + 1, q(x) = x - 1  =>  p(q(x)) = x^2 - 2x + 2
        let p = Polynomial::new().with_term(1, 2).with_term(1, 0);
        let q = Polynomial::new().with_term(1, 1).with_term(-1, 0);
        assert_eq!(p.compose(&q).to_string(), "1x^2 - 2x^1 + 2x^0");
    }

    #[test]
    fn test_compose_with_identity_and_constants() {
        let x = Polynomial::monomial(1, 1);
        assert_eq!(p1().compose(&x), p1());
        assert_eq!(x.compose(&p1()), p1());
        assert_eq!(p1().compose(&Polynomial::new()), Polynomial::constant(6));
        assert_eq!(
            Polynomial::constant(9).compose(&p2()),
            Polynomial::constant(9)
        );
    }

    #[test]
    fn test_compose_demo_pair() {
        let composed = p1().compose(&p2());
        assert_eq!(composed.degree(), Some(8));
        for n in -3..=3 {
            assert_eq!(composed.evaluate(n), p1().evaluate(p2().evaluate(n)));
        }
    }
}

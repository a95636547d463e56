// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{Polynomial, Term};
use num_traits::Zero;
use proptest::prelude::*;

fn arb_poly(max_exp: usize, max_terms: usize) -> impl Strategy<Value = Polynomial> {
    prop::collection::vec((-20i64..=20, 0..=max_exp), 0..=max_terms)
        .prop_map(|terms| {
            terms
                .into_iter()
                .map(|(c, e)| Term::new(c, e))
                .collect::<Polynomial>()
        })
}

/// Divisors with leading coefficient 1 or -1, so every division step is exact.
fn arb_unit_divisor() -> impl Strategy<Value = Polynomial> {
    (0usize..=3, prop::bool::ANY, arb_poly(2, 3)).prop_map(|(degree, negative, tail)| {
        let lead = if negative { -1 } else { 1 };
        let mut divisor: Polynomial = tail
            .terms()
            .iter()
            .filter(|t| t.exp() < degree)
            .cloned()
            .collect();
        divisor.add_term(lead, degree);
        divisor
    })
}

fn arb_nonzero_divisor() -> impl Strategy<Value = Polynomial> {
    arb_poly(4, 4).prop_filter("divisor must be non-zero", |p| !p.is_zero())
}

fn assert_well_formed(poly: &Polynomial) -> Result<(), TestCaseError> {
    for pair in poly.terms().windows(2) {
        prop_assert!(pair[0].exp() > pair[1].exp(), "exponents not strictly decreasing");
    }
    for term in poly.terms() {
        prop_assert!(!term.coeff().is_zero(), "zero coefficient stored");
    }
    Ok(())
}

proptest! {
    #[test]
    fn addition_commutes(p in arb_poly(8, 6), q in arb_poly(8, 6)) {
        prop_assert_eq!(&p + &q, &q + &p);
    }

    #[test]
    fn addition_associates(p in arb_poly(8, 6), q in arb_poly(8, 6), r in arb_poly(8, 6)) {
        prop_assert_eq!(&(&p + &q) + &r, &p + &(&q + &r));
    }

    #[test]
    fn zero_is_additive_identity(p in arb_poly(8, 6)) {
        prop_assert_eq!(&p + &Polynomial::new(), p.clone());
        prop_assert_eq!(&Polynomial::new() + &p, p);
    }

    #[test]
    fn self_subtraction_is_zero(p in arb_poly(8, 6)) {
        prop_assert!((&p - &p).is_zero());
    }

    #[test]
    fn subtraction_is_addition_of_negation(p in arb_poly(8, 6), q in arb_poly(8, 6)) {
        prop_assert_eq!(&p - &q, &p + &(-&q));
    }

    #[test]
    fn multiplication_commutes(p in arb_poly(6, 5), q in arb_poly(6, 5)) {
        prop_assert_eq!(&p * &q, &q * &p);
    }

    #[test]
    fn multiplicative_identities(p in arb_poly(6, 5)) {
        prop_assert!((&p * &Polynomial::new()).is_zero());
        prop_assert_eq!(&p * &Polynomial::constant(1), p);
    }

    #[test]
    fn multiplication_distributes(p in arb_poly(5, 4), q in arb_poly(5, 4), r in arb_poly(5, 4)) {
        prop_assert_eq!(&p * &(&q + &r), &(&p * &q) + &(&p * &r));
    }

    #[test]
    fn unit_division_identity(p in arb_poly(8, 6), d in arb_unit_divisor()) {
        let division = p.div(&d).unwrap();
        prop_assert!(division.is_exact());
        prop_assert_eq!(&(&division.quotient * &d) + &division.remainder, p);
        if let (Some(r), Some(dd)) = (division.remainder.degree(), d.degree()) {
            prop_assert!(r < dd);
        }
        assert_well_formed(&division.quotient)?;
        assert_well_formed(&division.remainder)?;
    }

    #[test]
    fn truncated_division_still_reconstructs(p in arb_poly(8, 6), d in arb_nonzero_divisor()) {
        let division = p.div(&d).unwrap();
        prop_assert_eq!(&(&division.quotient * &d) + &division.remainder, p);
    }

    #[test]
    fn evaluation_paths_agree(p in arb_poly(8, 6), n in -12i64..=12) {
        prop_assert_eq!(p.evaluate(n), p.compose_eval(n));
    }

    #[test]
    fn composition_matches_nested_evaluation(
        p in arb_poly(4, 4),
        q in arb_poly(3, 3),
        n in -5i64..=5,
    ) {
        prop_assert_eq!(p.compose(&q).evaluate(n), p.evaluate(q.evaluate(n)));
    }

    #[test]
    fn evaluation_is_a_ring_homomorphism(p in arb_poly(6, 5), q in arb_poly(6, 5), n in -8i64..=8) {
        prop_assert_eq!((&p + &q).evaluate(n), p.evaluate(n) + q.evaluate(n));
        prop_assert_eq!((&p * &q).evaluate(n), p.evaluate(n) * q.evaluate(n));
    }

    #[test]
    fn results_stay_well_formed(p in arb_poly(6, 5), q in arb_poly(6, 5)) {
        assert_well_formed(&p)?;
        assert_well_formed(&(&p + &q))?;
        assert_well_formed(&(&p - &q))?;
        assert_well_formed(&(&p * &q))?;
        assert_well_formed(&p.compose(&q))?;
    }
}

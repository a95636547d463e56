// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use intpoly_polynomial::Polynomial;

pub fn execute() {
    let mut p1 = Polynomial::new();
    p1.add_term(2, 4)
        .add_term(-3, 3)
        .add_term(4, 2)
        .add_term(-5, 1)
        .add_term(6, 0);
    println!("P1: {}", p1);

    let mut p2 = Polynomial::new();
    p2.add_term(1, 2).add_term(-3, 1).add_term(1, 0);
    println!("P2: {}\n", p2);

    println!("P1 + P2 = {}", &p1 + &p2);
    println!("P1 - P2 = {}\n", &p1 - &p2);

    println!("P1 * P2 = {}\n", &p1 * &p2);

    // P2 is monic, so the division cannot fail.
    if let Ok(division) = p1.div(&p2) {
        println!("P1 / P2 = {}", division.quotient);
        println!("P1 % P2 = {}\n", division.remainder);
    }

    println!("P1(2) = {}\n", p1.evaluate(2));

    println!("P1 o P2: {}\n", p1.compose(&p2));

    println!("P2(1) = {}", p2.compose_eval(1));
}

// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use intpoly_polynomial::Polynomial;
use num_bigint::BigInt;
use tracing::info;

pub fn execute(poly: &Polynomial, at: BigInt, compose: bool) {
    let value = if compose {
        info!(%poly, %at, "evaluating by composition");
        poly.compose_eval(at)
    } else {
        info!(%poly, %at, "evaluating by remainder theorem");
        poly.evaluate(at)
    };

    println!("{}", value);
}

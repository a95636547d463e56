// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Result};
use intpoly_polynomial::{Polynomial, Term};

pub mod telemetry;

/// Parse a comma separated list of `coeff:exp` terms, eg. `2:4,-3:3,6:0`.
/// The single token `0` is the zero polynomial.
pub fn parse_polynomial(s: &str) -> Result<Polynomial> {
    let s = s.trim();
    if s == "0" {
        return Ok(Polynomial::new());
    }
    if s.is_empty() {
        bail!("polynomial must have at least one term (use `0` for the zero polynomial)");
    }

    s.split(',')
        .map(|token| token.parse::<Term>().map_err(Into::into))
        .collect()
}

// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use intpoly_polynomial::Polynomial;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Compose,
}

pub fn execute(op: Operation, lhs: &Polynomial, rhs: &Polynomial) -> Result<()> {
    info!(?op, %lhs, %rhs, "applying operation");

    match op {
        Operation::Add => println!("{}", lhs + rhs),
        Operation::Sub => println!("{}", lhs - rhs),
        Operation::Mul => println!("{}", lhs * rhs),
        Operation::Div => {
            let division = lhs.div(rhs).context("Could not divide polynomials")?;
            if division.truncated {
                warn!("divisor's leading coefficient does not divide evenly; quotient is truncated");
            }
            println!("quotient:  {}", division.quotient);
            println!("remainder: {}", division.remainder);
        }
        Operation::Rem => {
            let remainder = lhs
                .remainder(rhs)
                .context("Could not divide polynomials")?;
            println!("{}", remainder);
        }
        Operation::Compose => println!("{}", lhs.compose(rhs)),
    }

    Ok(())
}

// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::arithmetic::{self, Operation};
use crate::helpers::parse_polynomial;
use crate::helpers::telemetry::setup_simple_tracing;
use crate::{demo, eval};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use intpoly_polynomial::Polynomial;
use num_bigint::BigInt;
use tracing::{debug, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "intpoly")]
#[command(about = "Integer polynomial arithmetic: add, subtract, multiply, divide, evaluate and compose", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `intpoly -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());
        debug!(command = ?self.command, "executing");

        match self.command {
            Commands::Demo => demo::execute(),
            Commands::Add { lhs, rhs } => arithmetic::execute(Operation::Add, &lhs, &rhs)?,
            Commands::Sub { lhs, rhs } => arithmetic::execute(Operation::Sub, &lhs, &rhs)?,
            Commands::Mul { lhs, rhs } => arithmetic::execute(Operation::Mul, &lhs, &rhs)?,
            Commands::Div { lhs, rhs } => arithmetic::execute(Operation::Div, &lhs, &rhs)?,
            Commands::Rem { lhs, rhs } => arithmetic::execute(Operation::Rem, &lhs, &rhs)?,
            Commands::Compose { lhs, rhs } => {
                arithmetic::execute(Operation::Compose, &lhs, &rhs)?
            }
            Commands::Eval { poly, at, compose } => eval::execute(&poly, at, compose),
        }

        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in demonstration on P1 = 2x^4 - 3x^3 + 4x^2 - 5x + 6 and P2 = x^2 - 3x + 1
    Demo,

    /// Print lhs + rhs
    Add {
        /// Left operand as comma separated `coeff:exp` terms, eg. `2:4,-3:3,6:0`
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        lhs: Polynomial,

        /// Right operand as comma separated `coeff:exp` terms
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        rhs: Polynomial,
    },

    /// Print lhs - rhs
    Sub {
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        lhs: Polynomial,
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        rhs: Polynomial,
    },

    /// Print lhs * rhs
    Mul {
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        lhs: Polynomial,
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        rhs: Polynomial,
    },

    /// Print the quotient and remainder of lhs / rhs
    Div {
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        lhs: Polynomial,
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        rhs: Polynomial,
    },

    /// Print lhs % rhs
    Rem {
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        lhs: Polynomial,
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        rhs: Polynomial,
    },

    /// Print lhs(rhs(x))
    Compose {
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        lhs: Polynomial,
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        rhs: Polynomial,
    },

    /// Evaluate a polynomial at an integer point
    Eval {
        /// Polynomial as comma separated `coeff:exp` terms
        #[arg(long, value_parser = parse_polynomial, allow_hyphen_values = true)]
        poly: Polynomial,

        /// The point to evaluate at
        #[arg(long, allow_hyphen_values = true)]
        at: BigInt,

        /// Evaluate by composing with a constant instead of the remainder theorem
        #[arg(long)]
        compose: bool,
    },
}

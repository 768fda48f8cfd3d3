//! Cyclic Prime Explorer
//!
//! Command-line front end that turns primes (or literal digit strings) into
//! lists of prime sub-numbers, ready to be submitted as OEIS sequences.
//!
//! # Architecture
//!
//! - **Args**: hand-rolled argv parsing into a [`Command`]
//! - **Config**: environment-driven settings ([`ExploreConfig`])
//! - **Explore**: drivers composing cyclic-core and cyclic-primality into reports
//! - **Error**: one error type with a distinct exit code per failure kind
//!
//! # Example
//!
//! ```no_run
//! use cyclic_cli::{execute, parse_args, ExploreConfig};
//! use cyclic_primality::{Classifier, FactorDb};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExploreConfig::default();
//!     let classifier = Classifier::new(FactorDb::new(config.oracle.clone())?);
//!     let command = parse_args(["-prime", "7", "10", "2"])?;
//!     execute(command, &classifier, config.numerator, &mut std::io::stdout()).await?;
//!     Ok(())
//! }
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod explore;

use std::io::Write;

use cyclic_primality::{Classifier, FactorOracle};

pub use args::{parse_args, Command, USAGE};
pub use config::ExploreConfig;
pub use error::{Error, Result};
pub use explore::{
    explore_by_number, explore_by_prime, prime_index_listing, repair_listing, CyclicSummary,
    ExploreReport, IndexReport, PrimeHit, RepairReport, Repaired,
};

/// Run one command and write its report to `out`.
pub async fn execute<O, W>(
    command: Command,
    classifier: &Classifier<O>,
    numerator: u64,
    out: &mut W,
) -> Result<()>
where
    O: FactorOracle,
    W: Write,
{
    let report = match command {
        Command::Usage => format!("{USAGE}\n"),
        Command::ExplorePrime {
            prime,
            base,
            max_digits,
        } => explore_by_prime(classifier, prime, base, max_digits, numerator)
            .await?
            .to_string(),
        Command::ExploreNumber { digits, max_digits } => {
            explore_by_number(classifier, &digits, max_digits)
                .await?
                .to_string()
        }
        Command::Indices {
            prime,
            base,
            max_digits,
        } => prime_index_listing(prime, base, max_digits, numerator)?.to_string(),
        Command::Repair {
            prime,
            base,
            indices,
        } => repair_listing(prime, base, numerator, &indices)?.to_string(),
    };

    out.write_all(report.as_bytes())?;
    out.flush()?;
    Ok(())
}

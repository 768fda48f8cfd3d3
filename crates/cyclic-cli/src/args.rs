//! Command-line parsing.
//!
//! Usage:
//!   cyclicprime -prime <P> <N> <max_digits>
//!   cyclicprime -number <NUM> <N> <max_digits>
//!   cyclicprime -indices <P> <N> <max_digits>
//!   cyclicprime -repair <P> <N> <idx>...

use cyclic_core::{Base, DigitString};

use crate::error::{Error, Result};

/// Printed when the explorer runs without arguments.
pub const USAGE: &str = "\
Usage: cyclicprime (-prime prime_number | -number number) numeric_system max_digits
       cyclicprime -indices prime_number numeric_system max_digits
       cyclicprime -repair prime_number numeric_system index...

Modes:
  -prime    explore the cyclic number of a prime in the given base
  -number   explore a literal digit string (leading zeros kept) in the given base
  -indices  list 1-based enumeration indices of the prime sub-numbers
  -repair   rebuild sub-numbers from their leading-digit indices

Environment:
  CYCLIC_LOG_FILE             archive log file (default: logfile, empty disables)
  CYCLIC_ORACLE_URL           factorization oracle (default: http://factordb.com/api)
  CYCLIC_ORACLE_TIMEOUT_SECS  per-request oracle timeout (default: 30)
  CYCLIC_ORACLE_RETRIES       extra oracle attempts (default: 3)
  CYCLIC_ORACLE_THRESHOLD     decimal digits from which the oracle is used (default: 200)
  CYCLIC_NUMERATOR            numerator for cyclic numbers (default: 2)";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No arguments or an explicit help request.
    Usage,
    /// Explore the cyclic number of `prime` in `base`.
    ExplorePrime {
        prime: u64,
        base: Base,
        max_digits: usize,
    },
    /// Explore a literal digit string.
    ExploreNumber { digits: DigitString, max_digits: usize },
    /// Enumeration indices of the prime sub-numbers of `prime`'s cyclic number.
    Indices {
        prime: u64,
        base: Base,
        max_digits: usize,
    },
    /// Rebuild sub-numbers from leading-digit indices.
    Repair {
        prime: u64,
        base: Base,
        indices: Vec<u64>,
    },
}

fn number<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Usage(format!("{what} must be a non-negative integer, got {raw:?}")))
}

fn base(raw: &str) -> Result<Base> {
    Ok(Base::new(number(raw, "numeric_system")?)?)
}

fn expect_len(mode: &str, args: &[String], len: usize) -> Result<()> {
    if args.len() != len {
        return Err(Error::Usage(format!(
            "{mode} takes {len} arguments, got {}",
            args.len()
        )));
    }
    Ok(())
}

/// Parse arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let Some((mode, rest)) = args.split_first() else {
        return Ok(Command::Usage);
    };

    match mode.as_str() {
        "-prime" => {
            expect_len(mode, rest, 3)?;
            Ok(Command::ExplorePrime {
                prime: number(&rest[0], "prime_number")?,
                base: base(&rest[1])?,
                max_digits: number(&rest[2], "max_digits")?,
            })
        }
        "-number" => {
            expect_len(mode, rest, 3)?;
            let base = base(&rest[1])?;
            Ok(Command::ExploreNumber {
                digits: DigitString::new(&rest[0], base)?,
                max_digits: number(&rest[2], "max_digits")?,
            })
        }
        "-indices" => {
            expect_len(mode, rest, 3)?;
            Ok(Command::Indices {
                prime: number(&rest[0], "prime_number")?,
                base: base(&rest[1])?,
                max_digits: number(&rest[2], "max_digits")?,
            })
        }
        "-repair" => {
            if rest.len() < 3 {
                return Err(Error::Usage(format!(
                    "-repair takes a prime, a base and at least one index, got {} arguments",
                    rest.len()
                )));
            }
            let indices = rest[2..]
                .iter()
                .map(|raw| number(raw, "index"))
                .collect::<Result<Vec<u64>>>()?;
            Ok(Command::Repair {
                prime: number(&rest[0], "prime_number")?,
                base: base(&rest[1])?,
                indices,
            })
        }
        "-h" | "--help" | "help" => Ok(Command::Usage),
        other => Err(Error::Usage(format!("unknown mode {other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command> {
        parse_args(args.iter().copied())
    }

    #[test]
    fn no_arguments_is_usage() {
        assert_eq!(parse(&[]).unwrap(), Command::Usage);
        assert_eq!(parse(&["--help"]).unwrap(), Command::Usage);
    }

    #[test]
    fn prime_mode() {
        assert_eq!(
            parse(&["-prime", "7", "10", "2"]).unwrap(),
            Command::ExplorePrime {
                prime: 7,
                base: Base::DECIMAL,
                max_digits: 2
            }
        );
    }

    #[test]
    fn number_mode_keeps_leading_zeros() {
        match parse(&["-number", "0142", "10", "3"]).unwrap() {
            Command::ExploreNumber { digits, max_digits } => {
                assert_eq!(digits.as_str(), "0142");
                assert_eq!(max_digits, 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn number_mode_checks_digits_against_base() {
        assert!(matches!(
            parse(&["-number", "0192", "8", "3"]),
            Err(Error::Core(cyclic_core::Error::InvalidArgument(_)))
        ));
        assert!(parse(&["-number", "ff", "16", "2"]).is_ok());
    }

    #[test]
    fn repair_mode_takes_many_indices() {
        assert_eq!(
            parse(&["-repair", "7", "10", "2", "11"]).unwrap(),
            Command::Repair {
                prime: 7,
                base: Base::DECIMAL,
                indices: vec![2, 11]
            }
        );
        assert!(parse(&["-repair", "7", "10"]).is_err());
    }

    #[test]
    fn malformed_arguments() {
        assert!(matches!(parse(&["-prime", "seven", "10", "2"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["-prime", "7", "10"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["-prime", "7", "10", "2", "9"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["-prime", "7", "-3", "2"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["-indices", "7", "1", "2"]), Err(Error::Core(_))));
        assert!(matches!(parse(&["-frobnicate"]), Err(Error::Usage(_))));
    }

    #[test]
    fn usage_mentions_every_mode() {
        for mode in ["-prime", "-number", "-indices", "-repair"] {
            assert!(USAGE.contains(mode), "{}", mode);
        }
    }
}

//! Run configuration, read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use cyclic_core::DEFAULT_NUMERATOR;
use cyclic_logging::LoggingConfig;
use cyclic_primality::{ClassifierConfig, OracleConfig, DEFAULT_ORACLE_THRESHOLD_DIGITS};

use crate::error::{Error, Result};

/// Log file path; an empty value disables file logging.
pub const ENV_LOG_FILE: &str = "CYCLIC_LOG_FILE";
/// Factorization oracle endpoint.
pub const ENV_ORACLE_URL: &str = "CYCLIC_ORACLE_URL";
/// Per-request oracle timeout in seconds.
pub const ENV_ORACLE_TIMEOUT_SECS: &str = "CYCLIC_ORACLE_TIMEOUT_SECS";
/// Extra oracle attempts after a failure.
pub const ENV_ORACLE_RETRIES: &str = "CYCLIC_ORACLE_RETRIES";
/// Decimal digit count from which values go to the oracle.
pub const ENV_ORACLE_THRESHOLD: &str = "CYCLIC_ORACLE_THRESHOLD";
/// Numerator used when deriving a cyclic number from a prime.
pub const ENV_NUMERATOR: &str = "CYCLIC_NUMERATOR";

/// Everything a run needs besides its command line.
#[derive(Debug, Clone)]
pub struct ExploreConfig {
    pub logging: LoggingConfig,
    pub oracle: OracleConfig,
    pub classifier: ClassifierConfig,
    /// Numerator for `-prime`, `-indices` and `-repair`.
    pub numerator: u64,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        let oracle = OracleConfig::default();
        Self {
            logging: LoggingConfig::default(),
            classifier: ClassifierConfig {
                oracle_threshold_digits: DEFAULT_ORACLE_THRESHOLD_DIGITS,
                oracle_deadline: oracle.worst_case(),
            },
            oracle,
            numerator: DEFAULT_NUMERATOR,
        }
    }
}

impl ExploreConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_LOG_FILE) {
            config.logging.log_file = if path.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }

        if let Some(url) = lookup(ENV_ORACLE_URL) {
            config.oracle.endpoint = url.trim().to_string();
        }
        if let Some(secs) = parse_var::<u64>(&lookup, ENV_ORACLE_TIMEOUT_SECS)? {
            config.oracle.timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = parse_var::<u32>(&lookup, ENV_ORACLE_RETRIES)? {
            config.oracle.retries = retries;
        }
        config.classifier.oracle_deadline = config.oracle.worst_case();

        if let Some(digits) = parse_var::<usize>(&lookup, ENV_ORACLE_THRESHOLD)? {
            config.classifier.oracle_threshold_digits = digits;
        }
        if let Some(numerator) = parse_var::<u64>(&lookup, ENV_NUMERATOR)? {
            if numerator == 0 {
                return Err(Error::Usage(format!("{ENV_NUMERATOR} must be positive")));
            }
            config.numerator = numerator;
        }

        Ok(config)
    }

    /// Path of the archive log, if file logging is on.
    pub fn log_file(&self) -> Option<&PathBuf> {
        self.logging.log_file.as_ref()
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Usage(format!("{key}={raw:?} is not a valid number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclic_logging::DEFAULT_LOG_FILE;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ExploreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.log_file(), Some(&PathBuf::from(DEFAULT_LOG_FILE)));
        assert_eq!(config.oracle.endpoint, cyclic_primality::FACTORDB_ENDPOINT);
        assert_eq!(config.classifier.oracle_threshold_digits, 200);
        assert_eq!(config.numerator, 2);
        assert_eq!(config.classifier.oracle_deadline, config.oracle.worst_case());
    }

    #[test]
    fn overrides() {
        let config = ExploreConfig::from_lookup(lookup(&[
            (ENV_LOG_FILE, "/tmp/cyclic.log"),
            (ENV_ORACLE_URL, "http://localhost:9/api"),
            (ENV_ORACLE_TIMEOUT_SECS, "5"),
            (ENV_ORACLE_RETRIES, "0"),
            (ENV_ORACLE_THRESHOLD, " 50 "),
            (ENV_NUMERATOR, "1"),
        ]))
        .unwrap();

        assert_eq!(config.log_file(), Some(&PathBuf::from("/tmp/cyclic.log")));
        assert_eq!(config.oracle.endpoint, "http://localhost:9/api");
        assert_eq!(config.oracle.timeout, Duration::from_secs(5));
        assert_eq!(config.oracle.retries, 0);
        assert_eq!(config.classifier.oracle_deadline, Duration::from_secs(5));
        assert_eq!(config.classifier.oracle_threshold_digits, 50);
        assert_eq!(config.numerator, 1);
    }

    #[test]
    fn empty_log_file_disables_file_logging() {
        let config = ExploreConfig::from_lookup(lookup(&[(ENV_LOG_FILE, "")])).unwrap();
        assert!(config.log_file().is_none());
    }

    #[test]
    fn malformed_values() {
        for (key, value) in [
            (ENV_ORACLE_TIMEOUT_SECS, "soon"),
            (ENV_ORACLE_RETRIES, "-1"),
            (ENV_ORACLE_THRESHOLD, "1e3"),
            (ENV_NUMERATOR, "0"),
        ] {
            let result = ExploreConfig::from_lookup(lookup(&[(key, value)]));
            assert!(matches!(result, Err(Error::Usage(_))), "{}={}", key, value);
        }
    }
}

//! Factorization oracle - remote factor lookups for values too large to test locally.
//!
//! The oracle is a capability: anything that can turn a value into its list
//! of prime factors. A single-entry list means the value is prime.
//!
//! [`FactorDb`] talks to the FactorDB web API:
//!
//! ```text
//! GET {endpoint}?query=71
//! {"id": "71", "status": "P", "factors": [["71", 1]]}
//! ```
//!
//! Factors come back as `[factor, multiplicity]` pairs and are expanded, so
//! `[["2", 2], ["3", 1]]` becomes `[2, 2, 3]`.

use std::future::Future;
use std::time::Duration;

use num_bigint::BigUint;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Public FactorDB API endpoint.
pub const FACTORDB_ENDPOINT: &str = "http://factordb.com/api";

/// Something that can factor a big integer.
pub trait FactorOracle {
    /// Prime factors of `value`, repeated by multiplicity.
    fn factor(&self, value: &BigUint) -> impl Future<Output = Result<Vec<BigUint>>> + Send;
}

/// Configuration for the FactorDB client.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// API endpoint, queried as `{endpoint}?query={value}`.
    pub endpoint: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Extra attempts after the first one fails with a retryable error.
    pub retries: u32,

    /// Delay before the first retry; doubles on each further retry.
    pub backoff: Duration,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: FACTORDB_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            retries: 3,
            backoff: Duration::from_millis(500),
        }
    }
}

impl OracleConfig {
    /// Config pointing at a different endpoint, defaults otherwise.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Upper bound on wall time for one lookup, retries and backoff included.
    pub fn worst_case(&self) -> Duration {
        let attempts = self.retries + 1;
        let sleeping: Duration = (0..self.retries)
            .map(|i| self.backoff.saturating_mul(1 << i.min(16)))
            .sum();
        self.timeout.saturating_mul(attempts) + sleeping
    }
}

/// FactorDB status codes that do not carry a known factorization.
const UNRESOLVED_STATUSES: [&str; 3] = ["C", "U", "N"];

/// Body of a FactorDB API answer.
#[derive(Debug, Deserialize)]
struct FactorDbResponse {
    #[serde(default)]
    status: String,
    factors: Vec<(String, u32)>,
}

impl FactorDbResponse {
    fn factor_list(&self, value: &BigUint) -> Result<Vec<BigUint>> {
        let mut factors = Vec::new();
        for (text, multiplicity) in &self.factors {
            let factor = BigUint::parse_bytes(text.as_bytes(), 10).ok_or_else(|| {
                Error::MalformedResponse(format!("factor {text:?} is not a decimal integer"))
            })?;
            for _ in 0..*multiplicity {
                factors.push(factor.clone());
            }
        }

        // An unfactored composite is listed as itself; that must not read as prime.
        if UNRESOLVED_STATUSES.contains(&self.status.as_str()) && factors.len() == 1 {
            warn!(
                status = %self.status,
                "FactorDB has no factorization for {}; treating as not prime",
                value
            );
            return Ok(Vec::new());
        }

        Ok(factors)
    }
}

/// FactorDB HTTP client with timeout and bounded retry.
#[derive(Debug, Clone)]
pub struct FactorDb {
    client: reqwest::Client,
    config: OracleConfig,
}

impl FactorDb {
    /// Create a client for the given config.
    pub fn new(config: OracleConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    async fn query_once(&self, value: &BigUint) -> Result<Vec<BigUint>> {
        let url = format!("{}?query={}", self.config.endpoint, value);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(self.config.timeout)
            } else {
                Error::OracleUnavailable(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::OracleUnavailable(format!("HTTP {status} from {url}")));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(self.config.timeout)
            } else {
                Error::OracleUnavailable(e.to_string())
            }
        })?;
        let parsed: FactorDbResponse =
            serde_json::from_str(&body).map_err(|e| Error::MalformedResponse(e.to_string()))?;

        parsed.factor_list(value)
    }
}

impl FactorOracle for FactorDb {
    async fn factor(&self, value: &BigUint) -> Result<Vec<BigUint>> {
        let mut delay = self.config.backoff;
        let mut attempt = 0;

        loop {
            match self.query_once(value).await {
                Ok(factors) => {
                    debug!(attempt, count = factors.len(), "FactorDB answered");
                    return Ok(factors);
                }
                Err(e) if e.is_retryable() && attempt < self.config.retries => {
                    warn!("FactorDB attempt {} failed: {}; retrying in {:?}", attempt + 1, e, delay);
                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(2);
                    attempt += 1;
                }
                Err(e) if e.is_retryable() => {
                    return Err(Error::OracleUnavailable(format!(
                        "gave up after {} attempts: {}",
                        attempt + 1,
                        e
                    )));
                }
                Err(e) => return Err(e),
            }
        }
    }
}

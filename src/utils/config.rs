use num_bigint::BigInt;
use num_traits::Signed;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{FeeRatio, QuoteError, Result, parse_amount};

/// Big integers are written as decimal strings so 10^30 survives TOML
mod decimal_string {
    use num_bigint::BigInt;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use crate::types::parse_amount;

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_amount(&raw).map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Pricing settings
    #[serde(default)]
    pub quoter: QuoterConfig,

    /// Synthetic workload settings
    #[serde(default)]
    pub benchmark: BenchmarkConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoterConfig {
    #[serde(default)]
    pub fee: FeeRatio,
}

/// Benchmark workload: iteration `i` quotes
/// `(reserve_in - i, reserve_out + i, amount_in * i)`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub iterations: u64,

    #[serde(with = "decimal_string")]
    pub reserve_in: BigInt,

    #[serde(with = "decimal_string")]
    pub reserve_out: BigInt,

    #[serde(with = "decimal_string")]
    pub amount_in: BigInt,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: 5_000_000,
            reserve_in: BigInt::from(1_000_000_000_000_000_000u64),
            reserve_out: BigInt::from(2_000_000_000_000_000_000u64),
            amount_in: BigInt::from(100u32),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl Config {
    pub fn quoter_config(&self) -> &QuoterConfig {
        &self.quoter
    }

    pub fn benchmark_config(&self) -> &BenchmarkConfig {
        &self.benchmark
    }

    pub fn logging_config(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Load config from file or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load from `path` when it exists, then apply environment overrides
    pub fn load_from(path: &str) -> Result<Self> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `BENCH_*` overrides, `get` looks a variable up by name
    pub fn apply_overrides(&mut self, get: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(iterations) = get("BENCH_ITERATIONS") {
            self.benchmark.iterations = iterations
                .trim()
                .parse()
                .map_err(|e| QuoteError::Parse(format!("BENCH_ITERATIONS '{}': {}", iterations, e)))?;
        }

        if let Some(reserve_in) = get("BENCH_RESERVE_IN") {
            self.benchmark.reserve_in = parse_amount(&reserve_in)?;
        }

        if let Some(reserve_out) = get("BENCH_RESERVE_OUT") {
            self.benchmark.reserve_out = parse_amount(&reserve_out)?;
        }

        if let Some(amount_in) = get("BENCH_AMOUNT_IN") {
            self.benchmark.amount_in = parse_amount(&amount_in)?;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.quoter.fee.validate()?;

        let bench = &self.benchmark;
        if bench.iterations == 0 {
            return Err(QuoteError::Config("iterations must be greater than zero".into()));
        }

        // non-positive bases only ever quote zero
        if !bench.reserve_in.is_positive() || !bench.reserve_out.is_positive() || !bench.amount_in.is_positive() {
            warn!(
                "non-positive base state (reserve_in={}, reserve_out={}, amount_in={}), quotes will be zero",
                bench.reserve_in, bench.reserve_out, bench.amount_in
            );
        } else if bench.reserve_in <= BigInt::from(bench.iterations) {
            warn!(
                "reserve_in {} is drained before {} iterations, late quotes will be zero",
                bench.reserve_in, bench.iterations
            );
        }

        Ok(())
    }
}

use std::{fmt, sync::Arc, time::{Duration, Instant}};

use async_trait::async_trait;
use num_bigint::BigInt;
use num_traits::Zero;
use tracing::{debug, info};

use crate::{
    benchmark::inputs::SyntheticInputs,
    quoter::PriceCalculator,
    types::{AmountOut, QuoteError, Result, Timestamp, now},
    utils::config::BenchmarkConfig,
};

#[async_trait]
pub trait BenchmarkRunner: Send + Sync {
    /// Quote the whole workload and wait for it to finish
    async fn run(&self) -> Result<BenchmarkReport>;
}

/// Outcome of one benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkReport {
    pub last_result: AmountOut,
    pub elapsed_ms: u128,
    pub iterations: u64,
    pub started_at: Timestamp,
}

impl BenchmarkReport {
    pub fn quotes_per_sec(&self) -> u128 {
        if self.elapsed_ms == 0 {
            return self.iterations as u128 * 1000;
        }
        self.iterations as u128 * 1000 / self.elapsed_ms
    }
}

/// `<last_result> <elapsed_ms>`
impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.last_result, self.elapsed_ms)
    }
}

/// Runs the quoting loop on a single blocking worker and joins it
pub struct DefaultBenchmarkRunner {
    calculator: Arc<dyn PriceCalculator>,
    config: BenchmarkConfig,
}

impl DefaultBenchmarkRunner {
    pub fn new(calculator: Arc<dyn PriceCalculator>, config: BenchmarkConfig) -> Self {
        Self { calculator, config }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }
}

/// Quote every synthetic input in order, keeping only the last output.
///
/// An unfillable quote counts as zero, the same as the plain quoter.
pub fn run_workload(calculator: &dyn PriceCalculator, config: &BenchmarkConfig) -> (AmountOut, Duration) {
    let start = Instant::now();
    let mut last_result = BigInt::zero();

    for (reserve_in, reserve_out, amount_in) in SyntheticInputs::new(config) {
        last_result = calculator
            .tokens_out(&reserve_in, &reserve_out, &amount_in)
            .unwrap_or_default();
    }

    (last_result, start.elapsed())
}

#[async_trait]
impl BenchmarkRunner for DefaultBenchmarkRunner {
    async fn run(&self) -> Result<BenchmarkReport> {
        info!("Starting benchmark: {} quotes", self.config.iterations);
        debug!(
            "Base state: reserve_in={}, reserve_out={}, amount_in={}",
            self.config.reserve_in, self.config.reserve_out, self.config.amount_in
        );

        let calculator = self.calculator.clone();
        let config = self.config.clone();
        let started_at = now();

        let worker = tokio::task::spawn_blocking(move || run_workload(calculator.as_ref(), &config));
        let (last_result, elapsed) = worker.await?;

        let report = BenchmarkReport {
            last_result,
            elapsed_ms: elapsed.as_millis(),
            iterations: self.config.iterations,
            started_at,
        };

        info!(
            "Benchmark started at {} finished in {}ms ({} quotes/s)",
            report.started_at,
            report.elapsed_ms,
            report.quotes_per_sec()
        );
        Ok(report)
    }
}

pub struct BenchmarkRunnerBuilder {
    calculator: Option<Arc<dyn PriceCalculator>>,
    config: Option<BenchmarkConfig>,
}

impl BenchmarkRunnerBuilder {
    pub fn new() -> Self {
        Self {
            calculator: None,
            config: None,
        }
    }

    pub fn with_calculator(mut self, calculator: Arc<dyn PriceCalculator>) -> Self {
        self.calculator = Some(calculator);
        self
    }

    pub fn with_config(mut self, config: BenchmarkConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<DefaultBenchmarkRunner> {
        let calculator = self.calculator
            .ok_or_else(|| QuoteError::Config("PriceCalculator is required".to_string()))?;

        let config = self.config
            .ok_or_else(|| QuoteError::Config("BenchmarkConfig is required".to_string()))?;

        Ok(DefaultBenchmarkRunner::new(calculator, config))
    }
}

impl Default for BenchmarkRunnerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

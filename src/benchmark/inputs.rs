use num_bigint::BigInt;

use crate::{
    types::{AmountIn, Reserve},
    utils::config::BenchmarkConfig,
};

/// One pool state to quote: `(reserve_in, reserve_out, amount_in)`
pub type QuoteInput = (Reserve, Reserve, AmountIn);

/// Deterministic sequence of pool states drifting away from the base reserves.
///
/// Step `i` (1-based) yields `(reserve_in - i, reserve_out + i, amount_in * i)`.
#[derive(Debug, Clone)]
pub struct SyntheticInputs {
    reserve_in: Reserve,
    reserve_out: Reserve,
    amount_in: AmountIn,
    step: u64,
    iterations: u64,
}

impl SyntheticInputs {
    pub fn new(config: &BenchmarkConfig) -> Self {
        Self {
            reserve_in: config.reserve_in.clone(),
            reserve_out: config.reserve_out.clone(),
            amount_in: config.amount_in.clone(),
            step: 0,
            iterations: config.iterations,
        }
    }

    /// Input for step `i` without walking the sequence
    pub fn nth_input(&self, i: u64) -> QuoteInput {
        let delta = BigInt::from(i);
        (
            &self.reserve_in - &delta,
            &self.reserve_out + &delta,
            &self.amount_in * &delta,
        )
    }
}

impl Iterator for SyntheticInputs {
    type Item = QuoteInput;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.iterations {
            return None;
        }
        self.step += 1;
        Some(self.nth_input(self.step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.iterations - self.step).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SyntheticInputs {}

use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::{QuoteError, Result};

pub type Timestamp = u64;

/// Pooled balance of one asset in a two-asset pool
pub type Reserve = BigInt;
/// Quantity of the input asset being swapped
pub type AmountIn = BigInt;
/// Quantity of the output asset a swap returns
pub type AmountOut = BigInt;

/// Uniswap V2 style fee: 0.3% taken from the input amount
pub const DEFAULT_FEE_NUMERATOR: u32 = 997;
pub const DEFAULT_FEE_DENOMINATOR: u32 = 1000;

pub fn now() -> Timestamp {
    chrono::Utc::now().timestamp_millis() as u64
}

/// Parse a decimal integer string into a `BigInt`
pub fn parse_amount(value: &str) -> Result<BigInt> {
    BigInt::from_str(value.trim())
        .map_err(|e| QuoteError::Parse(format!("invalid integer '{}': {}", value, e)))
}

// ============================================================================
// Fee
// ============================================================================

/// Share of the input amount that reaches the pool, `numerator / denominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeRatio {
    pub numerator: u32,
    pub denominator: u32,
}

impl FeeRatio {
    pub fn new(numerator: u32, denominator: u32) -> Result<Self> {
        let fee = Self { numerator, denominator };
        fee.validate()?;
        Ok(fee)
    }

    /// A ratio of 1/1 keeps the whole input (no fee)
    pub fn none() -> Self {
        Self { numerator: 1, denominator: 1 }
    }

    pub fn validate(&self) -> Result<()> {
        if self.numerator == 0 || self.numerator > self.denominator {
            return Err(QuoteError::Config(format!(
                "fee ratio must satisfy 0 < numerator <= denominator, got {}/{}",
                self.numerator, self.denominator
            )));
        }
        Ok(())
    }

    /// Fee charged in basis points, rounded down
    pub fn fee_bps(&self) -> u32 {
        if self.denominator == 0 {
            return 10_000;
        }
        let kept = self.numerator as u64 * 10_000 / self.denominator as u64;
        10_000 - kept.min(10_000) as u32
    }
}

impl Default for FeeRatio {
    fn default() -> Self {
        Self {
            numerator: DEFAULT_FEE_NUMERATOR,
            denominator: DEFAULT_FEE_DENOMINATOR,
        }
    }
}

impl fmt::Display for FeeRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({} bps)", self.numerator, self.denominator, self.fee_bps())
    }
}

// ============================================================================
// Swap Quote
// ============================================================================

/// Input and output amounts of a single exact-input swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuote {
    pub amount_in: AmountIn,
    pub amount_out: AmountOut,
}

impl SwapQuote {
    pub fn new(amount_in: AmountIn, amount_out: AmountOut) -> Self {
        Self { amount_in, amount_out }
    }

    /// Zero output means the pool could not fill the swap
    pub fn is_empty(&self) -> bool {
        self.amount_out.is_zero()
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.amount_in, self.amount_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fee_is_thirty_bps() {
        assert_eq!(FeeRatio::default().fee_bps(), 30);
        assert_eq!(FeeRatio::none().fee_bps(), 0);
    }

    #[test]
    fn rejects_invalid_fee_ratio() {
        assert!(FeeRatio::new(0, 1000).is_err());
        assert!(FeeRatio::new(1001, 1000).is_err());
        assert!(FeeRatio::new(9975, 10_000).is_ok());
    }

    #[test]
    fn parses_large_amounts() {
        let Ok(value) = parse_amount(" 1000000000000000000000000000000 ") else {
            panic!("valid integer");
        };
        assert_eq!(value, BigInt::from(10u8).pow(30));
        assert!(parse_amount("12e5").is_err());
    }
}

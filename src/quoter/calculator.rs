use crate::{
    types::{AmountIn, AmountOut, FeeRatio, Reserve, SwapQuote},
    utils::{config::QuoterConfig, math},
};

/// Prices a swap against a pair of pool reserves in either direction.
///
/// `None` means the pool cannot serve the request (non-positive reserves or
/// amounts, or an output the pool cannot pay).
pub trait PriceCalculator: Send + Sync {
    /// Output received for an exact input
    fn tokens_out(&self, reserve_in: &Reserve, reserve_out: &Reserve, amount_in: &AmountIn) -> Option<AmountOut>;

    /// Input required for an exact output
    fn tokens_in(&self, reserve_in: &Reserve, reserve_out: &Reserve, amount_out: &AmountOut) -> Option<AmountIn>;

    fn quote_exact_in(&self, reserve_in: &Reserve, reserve_out: &Reserve, amount_in: &AmountIn) -> Option<SwapQuote> {
        self.tokens_out(reserve_in, reserve_out, amount_in)
            .map(|amount_out| SwapQuote::new(amount_in.clone(), amount_out))
    }
}

/// Uniswap V2 style `x * y = k` pool with the fee taken from the input
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantProductCalculator {
    fee: FeeRatio,
}

impl ConstantProductCalculator {
    pub fn new(config: &QuoterConfig) -> Self {
        Self { fee: config.fee }
    }

    pub fn with_fee(fee: FeeRatio) -> Self {
        Self { fee }
    }

    pub fn fee(&self) -> FeeRatio {
        self.fee
    }
}

impl PriceCalculator for ConstantProductCalculator {
    fn tokens_out(&self, reserve_in: &Reserve, reserve_out: &Reserve, amount_in: &AmountIn) -> Option<AmountOut> {
        if !math::is_tradable(reserve_in, reserve_out, amount_in) {
            return None;
        }
        Some(math::get_amount_out_with_fee(reserve_in, reserve_out, amount_in, self.fee))
    }

    fn tokens_in(&self, reserve_in: &Reserve, reserve_out: &Reserve, amount_out: &AmountOut) -> Option<AmountIn> {
        math::get_amount_in_with_fee(reserve_in, reserve_out, amount_out, self.fee)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;

    #[test]
    fn rejects_empty_pool() {
        let calc = ConstantProductCalculator::default();
        let out = calc.tokens_out(&BigInt::from(0), &BigInt::from(2000), &BigInt::from(100));
        assert_eq!(out, None);
    }

    #[test]
    fn uses_configured_fee() {
        let Ok(fee) = FeeRatio::new(9975, 10_000) else {
            panic!("valid fee");
        };
        let calc = ConstantProductCalculator::with_fee(fee);
        // 100*9975*2000 / (1000*10000 + 997500) = 1_995_000_000 / 10_997_500
        let out = calc.tokens_out(&BigInt::from(1000), &BigInt::from(2000), &BigInt::from(100));
        assert_eq!(out, Some(BigInt::from(181)));
    }

    #[test]
    fn quote_exact_in_keeps_input() {
        let calc = ConstantProductCalculator::new(&QuoterConfig::default());
        let Some(quote) = calc.quote_exact_in(&BigInt::from(1000), &BigInt::from(2000), &BigInt::from(100)) else {
            panic!("pool has reserves");
        };
        assert_eq!(quote.amount_in, BigInt::from(100));
        assert_eq!(quote.amount_out, BigInt::from(181));
        assert!(!quote.is_empty());
    }

    #[test]
    fn tokens_in_round_trips() {
        let calc = ConstantProductCalculator::default();
        let (r_in, r_out) = (BigInt::from(5_000_000), BigInt::from(9_000_000));
        let wanted = BigInt::from(12_345);
        let Some(amount_in) = calc.tokens_in(&r_in, &r_out, &wanted) else {
            panic!("pool can pay out");
        };
        let Some(out) = calc.tokens_out(&r_in, &r_out, &amount_in) else {
            panic!("pool has reserves");
        };
        assert!(out >= wanted);
    }
}

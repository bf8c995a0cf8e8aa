use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::types::{AmountIn, AmountOut, FeeRatio, QuoteError, Reserve, Result};

/// Both reserves and the traded amount are strictly positive
pub fn is_tradable(reserve_in: &Reserve, reserve_out: &Reserve, amount: &BigInt) -> bool {
    reserve_in.is_positive() && reserve_out.is_positive() && amount.is_positive()
}

/// Calculate constant product AMM output amount with the default 0.3% fee.
///
/// Returns zero when any argument is zero or negative (insufficient reserves).
/// The result is floored, so a tiny `amount_in` against a deep pool can
/// legitimately quote zero as well.
pub fn get_amount_out(reserve_in: &Reserve, reserve_out: &Reserve, amount_in: &AmountIn) -> AmountOut {
    get_amount_out_with_fee(reserve_in, reserve_out, amount_in, FeeRatio::default())
}

/// Calculate constant product AMM output amount for an arbitrary fee ratio
pub fn get_amount_out_with_fee(
    reserve_in: &Reserve,
    reserve_out: &Reserve,
    amount_in: &AmountIn,
    fee: FeeRatio,
) -> AmountOut {
    // a zero numerator keeps nothing of the input
    if !is_tradable(reserve_in, reserve_out, amount_in) || fee.numerator == 0 {
        return BigInt::zero();
    }

    let amount_in_with_fee = amount_in * fee.numerator;
    let numerator = &amount_in_with_fee * reserve_out;
    let denominator = reserve_in * fee.denominator + amount_in_with_fee;

    // both sides positive, truncation is floor
    numerator / denominator
}

/// Like [`get_amount_out`], but reports non-positive inputs as an error
/// instead of quoting zero
pub fn try_get_amount_out(
    reserve_in: &Reserve,
    reserve_out: &Reserve,
    amount_in: &AmountIn,
) -> Result<AmountOut> {
    if !is_tradable(reserve_in, reserve_out, amount_in) {
        return Err(QuoteError::insufficient_reserves(reserve_in, reserve_out, amount_in));
    }
    Ok(get_amount_out(reserve_in, reserve_out, amount_in))
}

/// Calculate the input required to receive `amount_out`, default 0.3% fee
pub fn get_amount_in(reserve_in: &Reserve, reserve_out: &Reserve, amount_out: &AmountOut) -> Option<AmountIn> {
    get_amount_in_with_fee(reserve_in, reserve_out, amount_out, FeeRatio::default())
}

/// Calculate the input required to receive `amount_out`.
///
/// Rounds up by one unit so that quoting the returned input always yields at
/// least `amount_out`. `None` when an argument is non-positive or the pool
/// cannot pay out `amount_out`.
pub fn get_amount_in_with_fee(
    reserve_in: &Reserve,
    reserve_out: &Reserve,
    amount_out: &AmountOut,
    fee: FeeRatio,
) -> Option<AmountIn> {
    if !is_tradable(reserve_in, reserve_out, amount_out) || amount_out >= reserve_out || fee.numerator == 0 {
        return None;
    }

    let numerator = reserve_in * amount_out * fee.denominator;
    let denominator = (reserve_out - amount_out) * fee.numerator;

    Some(numerator / denominator + BigInt::one())
}

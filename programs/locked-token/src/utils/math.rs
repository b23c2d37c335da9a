//! Fixed-point helpers. All rounding is toward zero so the ledger never
//! pays out more than has vested.

use crate::constants::SCALE;
use crate::error::LedgerError;

/// Exact `floor(a * b / d)` without forming the full `a * b` product.
///
/// Splits `a` into `q * d + r` so that `a * b / d == q * b + r * b / d`.
/// Grant sizes around 10^21 times `SCALE` would overflow `u128` if multiplied
/// directly; the split keeps every intermediate below `max(q * b, r * b)`.
pub fn mul_div(a: u128, b: u128, d: u128) -> Result<u128, LedgerError> {
    if d == 0 {
        return Err(LedgerError::MathOverflow);
    }
    let whole = (a / d)
        .checked_mul(b)
        .ok_or(LedgerError::MathOverflow)?;
    let part = (a % d)
        .checked_mul(b)
        .ok_or(LedgerError::MathOverflow)?
        / d;
    whole.checked_add(part).ok_or(LedgerError::MathOverflow)
}

/// Per-second accrual rate for `amount` vesting over `seconds`, scaled by `SCALE`.
pub fn rate_for(amount: u128, seconds: u128) -> Result<u128, LedgerError> {
    mul_div(amount, SCALE, seconds)
}

/// Value accrued at `slope` over `seconds`.
pub fn accrued_over(slope: u128, seconds: u128) -> Result<u128, LedgerError> {
    mul_div(slope, seconds, SCALE)
}

//! Amount parsing and the settled-debt threshold.

use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Debt entries whose absolute value is at or below this are treated as
/// settled for display and totals. The stored value is left untouched.
pub const SETTLED_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Returns true if `amount` counts as settled (|amount| <= 0.01).
pub fn is_settled(amount: Decimal) -> bool {
    amount.abs() <= SETTLED_THRESHOLD
}

/// Parse a user-entered amount.
///
/// Accepts plain and scientific notation. Anything that is not a number,
/// or is zero or negative, is rejected with [`LedgerError::InvalidAmount`].
/// A positive number that `Decimal` cannot represent (roughly beyond
/// 7.9e28, or more than 28 decimal places) is rejected with
/// [`LedgerError::AmountOutOfRange`].
///
/// ```
/// use budget_ledger::core::amount::parse_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_amount(" 12.50 ").unwrap(), dec!(12.50));
/// assert!(parse_amount("NaN").is_err());
/// assert!(parse_amount("0").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => LedgerError::AmountOutOfRange,
            _ => LedgerError::InvalidAmount,
        })?;
    require_positive(amount)
}

/// Convert a floating point amount, rejecting NaN, infinities and
/// non-positive values. Positive values outside the `Decimal` range fail
/// with [`LedgerError::AmountOutOfRange`].
pub fn amount_from_f64(value: f64) -> Result<Decimal> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LedgerError::InvalidAmount);
    }
    let amount = Decimal::from_f64_retain(value).ok_or(LedgerError::AmountOutOfRange)?;
    require_positive(amount.normalize())
}

pub(crate) fn require_positive(amount: Decimal) -> Result<Decimal> {
    if amount > Decimal::ZERO {
        Ok(amount)
    } else {
        Err(LedgerError::InvalidAmount)
    }
}

//! Fixed-price conversion and sale-window arithmetic.
//!
//! Everything here is pure and overflow-checked. Conversions use integer
//! division; the remainder of an uneven payment is forfeited, never refunded.

use anchor_lang::prelude::*;

use crate::errors::PresaleError;

/// Converts a payment in value units into token units at `unit_price`
/// value units per token unit.
///
/// The result is `payment / unit_price`; `payment % unit_price` stays with
/// the treasury.
pub fn tokens_for_payment(payment: u64, unit_price: u64) -> Result<u64> {
    require!(unit_price > 0, PresaleError::DivisionByZero);
    Ok(payment / unit_price)
}

/// Value units left over after converting `payment`.
pub fn forfeited_remainder(payment: u64, unit_price: u64) -> Result<u64> {
    payment
        .checked_rem(unit_price)
        .ok_or_else(|| PresaleError::DivisionByZero.into())
}

/// Purchases are allowed strictly before the deadline.
pub fn is_within_window(now: i64, deadline: i64) -> bool {
    now < deadline
}

pub fn checked_add(lhs: u64, rhs: u64) -> Result<u64> {
    lhs.checked_add(rhs).ok_or_else(|| PresaleError::Overflow.into())
}

pub fn checked_sub(lhs: u64, rhs: u64) -> Result<u64> {
    lhs.checked_sub(rhs).ok_or_else(|| PresaleError::Overflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_presale_error;

    #[test]
    fn test_tokens_for_payment_exact() {
        assert_eq!(tokens_for_payment(3_500, 3_500).unwrap(), 1);
        assert_eq!(tokens_for_payment(7_000, 3_500).unwrap(), 2);
        assert_eq!(tokens_for_payment(u64::MAX, 1).unwrap(), u64::MAX);
    }

    #[test]
    fn test_remainder_is_forfeited() {
        assert_eq!(tokens_for_payment(10_499, 3_500).unwrap(), 2);
        assert_eq!(forfeited_remainder(10_499, 3_500).unwrap(), 3_499);
        assert_eq!(tokens_for_payment(3_499, 3_500).unwrap(), 0);
    }

    #[test]
    fn test_zero_price_is_division_by_zero() {
        assert_presale_error(tokens_for_payment(1_000, 0), PresaleError::DivisionByZero);
        assert_presale_error(forfeited_remainder(1_000, 0), PresaleError::DivisionByZero);
    }

    #[test]
    fn test_window_boundary() {
        let deadline = 1_700_000_000;
        assert!(is_within_window(deadline - 1, deadline));
        assert!(!is_within_window(deadline, deadline));
        assert!(!is_within_window(deadline + 1, deadline));
        // An unset deadline of zero closes the window for any real clock.
        assert!(!is_within_window(1, 0));
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(checked_add(1, 2).unwrap(), 3);
        assert_presale_error(checked_add(u64::MAX, 1), PresaleError::Overflow);
        assert_presale_error(checked_sub(0, 1), PresaleError::Overflow);
    }
}

//! Disbursement amount rules.
//!
//! Amounts are `NUMERIC(14, 2)` pesos in the database: positive, at most
//! twelve integer digits, centavo precision. The same rule is checked
//! here so a bad amount is rejected before any insert is attempted.

use rust_decimal::Decimal;
use thiserror::Error;

/// Exclusive upper bound for a voucher amount (twelve integer digits).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Errors from amount validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// Zero or negative amount.
    #[error("disbursement amount must be positive")]
    NotPositive,

    /// Amount does not fit in twelve integer digits.
    #[error("disbursement amount exceeds the supported maximum")]
    TooLarge,

    /// Finer than centavo precision.
    #[error("disbursement amount must have at most two decimal places")]
    TooPrecise,
}

/// Validates a voucher amount against the storage rules.
///
/// # Errors
///
/// Returns an error for non-positive, oversized, or sub-centavo amounts.
pub fn validate_amount(amount: Decimal) -> Result<(), AmountError> {
    if amount <= Decimal::ZERO {
        return Err(AmountError::NotPositive);
    }
    if amount >= MAX_AMOUNT {
        return Err(AmountError::TooLarge);
    }
    if amount.normalize().scale() > 2 {
        return Err(AmountError::TooPrecise);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_max_amount_constant() {
        assert_eq!(MAX_AMOUNT, dec!(1_000_000_000_000));
    }

    #[rstest]
    #[case(dec!(0.01))]
    #[case(dec!(15000.00))]
    #[case(dec!(999_999_999_999.99))]
    fn test_valid_amounts(#[case] amount: Decimal) {
        assert_eq!(validate_amount(amount), Ok(()));
    }

    #[rstest]
    #[case(dec!(0), AmountError::NotPositive)]
    #[case(dec!(-5.00), AmountError::NotPositive)]
    #[case(dec!(1_000_000_000_000), AmountError::TooLarge)]
    #[case(dec!(10.001), AmountError::TooPrecise)]
    fn test_invalid_amounts(#[case] amount: Decimal, #[case] expected: AmountError) {
        assert_eq!(validate_amount(amount), Err(expected));
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_precision() {
        // 10.0100 normalizes to 10.01
        assert_eq!(validate_amount(dec!(10.0100)), Ok(()));
    }
}

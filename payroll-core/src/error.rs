//! Error type shared by every payroll calculator.

use rust_decimal::Decimal;
use thiserror::Error;

/// Broad classification of a [`PayrollError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied an amount the calculation cannot accept.
    InvalidInput,
    /// The rate parameters are inconsistent or out of range.
    InvalidConfiguration,
}

/// Errors that can occur during payroll deduction calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayrollError {
    /// A monetary input that must be zero or more was negative.
    #[error("{field} cannot be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// A monetary input that must be strictly positive was zero or negative.
    #[error("{field} must be greater than zero, got {value}")]
    NonPositiveAmount { field: &'static str, value: Decimal },

    /// A required textual field was empty.
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    /// An amount is too large to annualize or sum without overflowing.
    #[error("{field} is too large to calculate with, got {value}")]
    AmountTooLarge { field: &'static str, value: Decimal },

    /// A rate or fraction was outside [0, 1].
    #[error("{field} must be between 0 and 1, got {value}")]
    RateOutOfRange { field: &'static str, value: Decimal },

    /// A cap, floor or deduction parameter was negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeParameter { field: &'static str, value: Decimal },

    /// The lower salary floor is above the upper salary cap.
    #[error("lower salary floor {lower} exceeds upper salary cap {upper}")]
    InvertedSalaryRange { lower: Decimal, upper: Decimal },

    /// The progressive tax bracket table is unusable.
    #[error("invalid tax brackets: {0}")]
    InvalidBrackets(&'static str),
}

impl PayrollError {
    /// Returns whether this error rejects the caller's input or the rate parameters.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeAmount { .. }
            | Self::NonPositiveAmount { .. }
            | Self::MissingField(_)
            | Self::AmountTooLarge { .. } => ErrorKind::InvalidInput,
            Self::RateOutOfRange { .. }
            | Self::NegativeParameter { .. }
            | Self::InvertedSalaryRange { .. }
            | Self::InvalidBrackets(_) => ErrorKind::InvalidConfiguration,
        }
    }
}

/// Fails with [`PayrollError::NegativeAmount`] when `value` is below zero.
pub(crate) fn ensure_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), PayrollError> {
    if value < Decimal::ZERO {
        return Err(PayrollError::NegativeAmount { field, value });
    }
    Ok(())
}

/// Fails with [`PayrollError::RateOutOfRange`] when `value` is outside [0, 1].
pub(crate) fn ensure_fraction(
    field: &'static str,
    value: Decimal,
) -> Result<(), PayrollError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(PayrollError::RateOutOfRange { field, value });
    }
    Ok(())
}

/// Fails with [`PayrollError::NegativeParameter`] when a configuration value is below zero.
pub(crate) fn ensure_parameter(
    field: &'static str,
    value: Decimal,
) -> Result<(), PayrollError> {
    if value < Decimal::ZERO {
        return Err(PayrollError::NegativeParameter { field, value });
    }
    Ok(())
}

/// Multiplies `value` by `factor`, failing with [`PayrollError::AmountTooLarge`] on overflow.
pub(crate) fn checked_product(
    field: &'static str,
    value: Decimal,
    factor: Decimal,
) -> Result<Decimal, PayrollError> {
    value
        .checked_mul(factor)
        .ok_or(PayrollError::AmountTooLarge { field, value })
}

/// Adds up `amounts`, failing with [`PayrollError::AmountTooLarge`] on overflow.
pub(crate) fn checked_sum(
    field: &'static str,
    amounts: impl IntoIterator<Item = Decimal>,
) -> Result<Decimal, PayrollError> {
    amounts.into_iter().try_fold(Decimal::ZERO, |total, amount| {
        total
            .checked_add(amount)
            .ok_or(PayrollError::AmountTooLarge { field, value: amount })
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn negative_amount_is_invalid_input() {
        let err = ensure_non_negative("monthly salary", dec!(-1)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "monthly salary cannot be negative, got -1");
    }

    #[test]
    fn zero_amount_is_accepted() {
        assert_eq!(ensure_non_negative("monthly salary", dec!(0)), Ok(()));
    }

    #[test]
    fn rate_above_one_is_configuration_error() {
        let err = ensure_fraction("rate", dec!(1.01)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn inverted_range_message_names_both_bounds() {
        let err = PayrollError::InvertedSalaryRange {
            lower: dec!(100),
            upper: dec!(50),
        };

        assert_eq!(
            err.to_string(),
            "lower salary floor 100 exceeds upper salary cap 50"
        );
    }

    #[test]
    fn checked_product_reports_overflow_as_invalid_input() {
        let err = checked_product("monthly gross", Decimal::MAX, dec!(12)).unwrap_err();

        assert_eq!(
            err,
            PayrollError::AmountTooLarge {
                field: "monthly gross",
                value: Decimal::MAX,
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn checked_sum_adds_amounts() {
        assert_eq!(
            checked_sum("deductions", [dec!(1950000), dec!(480000), dec!(0)]),
            Ok(dec!(2430000))
        );
    }

    #[test]
    fn checked_sum_names_the_overflowing_amount() {
        let result = checked_sum("deductions", [dec!(2380000), Decimal::MAX]);

        assert_eq!(
            result,
            Err(PayrollError::AmountTooLarge {
                field: "deductions",
                value: Decimal::MAX,
            })
        );
    }
}

//! Rounding rules used by the payroll calculators.
//!
//! Each deduction follows its own statutory rounding convention, so every rule
//! lives in its own function instead of behind a shared "round" helper. The
//! rules are not interchangeable: swapping one for another changes results at
//! the boundaries.

use rust_decimal::{Decimal, RoundingStrategy};

const ONE_THOUSAND: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);
const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Rounds a decimal value to the nearest whole yen.
///
/// Midpoints go to the even neighbour (banker's rounding), which is how the
/// social insurance premiums and the final monthly tax amounts are rounded.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::rounding::round_to_yen;
///
/// assert_eq!(round_to_yen(dec!(40997.8023)), dec!(40998));
/// assert_eq!(round_to_yen(dec!(67206.5)), dec!(67206));
/// assert_eq!(round_to_yen(dec!(36723.5)), dec!(36724));
/// ```
pub fn round_to_yen(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

/// Rounds a non-negative amount using the traditional withholding convention.
///
/// The fractional part is dropped unless it is strictly greater than 0.5
/// (50 sen), in which case the amount is rounded up. A fraction of exactly 0.5
/// rounds down.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::rounding::round_half_down;
///
/// assert_eq!(round_half_down(dec!(2750.5)), dec!(2750));
/// assert_eq!(round_half_down(dec!(2750.500001)), dec!(2751));
/// assert_eq!(round_half_down(dec!(4663.659)), dec!(4664));
/// ```
pub fn round_half_down(value: Decimal) -> Decimal {
    let whole = value.trunc();
    if value - whole > HALF {
        whole + Decimal::ONE
    } else {
        whole
    }
}

/// Truncates taxable income down to a multiple of 1,000 yen.
///
/// Uses floor semantics, so negative values move away from zero:
/// `-1,500` becomes `-2,000`, not `-1,000`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::rounding::floor_to_thousand;
///
/// assert_eq!(floor_to_thousand(dec!(6482076)), dec!(6482000));
/// assert_eq!(floor_to_thousand(dec!(-1500)), dec!(-2000));
/// ```
pub fn floor_to_thousand(value: Decimal) -> Decimal {
    (value / ONE_THOUSAND).floor() * ONE_THOUSAND
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_to_yen tests
    // =========================================================================

    #[test]
    fn round_to_yen_rounds_down_below_midpoint() {
        assert_eq!(round_to_yen(dec!(45749.4)), dec!(45749));
    }

    #[test]
    fn round_to_yen_rounds_up_above_midpoint() {
        assert_eq!(round_to_yen(dec!(40997.8023)), dec!(40998));
    }

    #[test]
    fn round_to_yen_sends_midpoint_to_even_neighbour() {
        assert_eq!(round_to_yen(dec!(67206.5)), dec!(67206));
        assert_eq!(round_to_yen(dec!(67207.5)), dec!(67208));
    }

    #[test]
    fn round_to_yen_preserves_whole_amounts() {
        assert_eq!(round_to_yen(dec!(59475)), dec!(59475));
    }

    #[test]
    fn round_to_yen_handles_negative_values() {
        assert_eq!(round_to_yen(dec!(-15388.3)), dec!(-15388));
    }

    // =========================================================================
    // round_half_down tests
    // =========================================================================

    #[test]
    fn round_half_down_rounds_exact_half_down() {
        assert_eq!(round_half_down(dec!(0.5)), dec!(0));
        assert_eq!(round_half_down(dec!(2750.5)), dec!(2750));
    }

    #[test]
    fn round_half_down_rounds_up_just_above_half() {
        assert_eq!(round_half_down(dec!(2750.500001)), dec!(2751));
    }

    #[test]
    fn round_half_down_truncates_below_half() {
        assert_eq!(round_half_down(dec!(2750.499)), dec!(2750));
    }

    #[test]
    fn round_half_down_keeps_whole_amounts() {
        assert_eq!(round_half_down(dec!(2750)), dec!(2750));
    }

    #[test]
    fn round_half_down_handles_zero() {
        assert_eq!(round_half_down(dec!(0)), dec!(0));
    }

    // =========================================================================
    // floor_to_thousand tests
    // =========================================================================

    #[test]
    fn floor_to_thousand_truncates_positive_values() {
        assert_eq!(floor_to_thousand(dec!(2306820)), dec!(2306000));
    }

    #[test]
    fn floor_to_thousand_keeps_exact_multiples() {
        assert_eq!(floor_to_thousand(dec!(1949000)), dec!(1949000));
    }

    #[test]
    fn floor_to_thousand_uses_floor_for_negative_values() {
        assert_eq!(floor_to_thousand(dec!(-3693180)), dec!(-3694000));
        assert_eq!(floor_to_thousand(dec!(-1)), dec!(-1000));
    }

    #[test]
    fn floor_to_thousand_keeps_negative_multiples() {
        assert_eq!(floor_to_thousand(dec!(-2000)), dec!(-2000));
    }
}

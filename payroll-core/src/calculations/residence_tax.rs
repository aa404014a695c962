//! Residence tax (municipal plus prefectural inhabitant tax).
//!
//! Residence tax is assessed on the previous year's income. Taxable income is
//! floored at zero, then the combined local rate and a fixed per-capita levy
//! are applied. The annual amount is collected in twelve monthly installments.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::calculations::ResidenceTax;
//!
//! let result = ResidenceTax::default()
//!     .calculate(dec!(8000000), dec!(1263180), 0)
//!     .unwrap();
//!
//! assert_eq!(result.taxable_income, dec!(4356820));
//! assert_eq!(result.monthly_tax, dec!(36724));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::PayrollError;
use crate::calculations::rounding::round_to_yen;
use crate::error::{
    checked_product, checked_sum, ensure_fraction, ensure_non_negative, ensure_parameter,
};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Statutory parameters for residence tax. Defaults are the 2025 values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidenceTaxConfig {
    pub employment_income_deduction: Decimal,

    /// Residence tax basic deduction. Lower than the income tax one.
    pub basic_deduction: Decimal,

    pub dependent_deduction: Decimal,
    pub municipal_tax_rate: Decimal,
    pub prefectural_tax_rate: Decimal,

    /// Fixed annual levy charged regardless of income.
    pub per_capita_tax: Decimal,
}

impl Default for ResidenceTaxConfig {
    fn default() -> Self {
        Self {
            employment_income_deduction: dec!(1950000),
            basic_deduction: dec!(430000),
            dependent_deduction: dec!(330000),
            municipal_tax_rate: dec!(0.06),
            prefectural_tax_rate: dec!(0.04),
            per_capita_tax: dec!(5000),
        }
    }
}

impl ResidenceTaxConfig {
    /// Returns a copy with the local tax rates replaced.
    pub fn with_local_rates(
        &self,
        municipal_tax_rate: Decimal,
        prefectural_tax_rate: Decimal,
    ) -> Self {
        Self {
            municipal_tax_rate,
            prefectural_tax_rate,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), PayrollError> {
        ensure_parameter(
            "employment income deduction",
            self.employment_income_deduction,
        )?;
        ensure_parameter("basic deduction", self.basic_deduction)?;
        ensure_parameter("dependent deduction", self.dependent_deduction)?;
        ensure_fraction("municipal tax rate", self.municipal_tax_rate)?;
        ensure_fraction("prefectural tax rate", self.prefectural_tax_rate)?;
        ensure_parameter("per capita tax", self.per_capita_tax)?;
        Ok(())
    }
}

/// Result of the residence tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidenceTaxResult {
    /// Previous year's taxable income, never below zero.
    pub taxable_income: Decimal,
    pub annual_tax: Decimal,
    pub monthly_tax: Decimal,
}

/// Calculator for the monthly residence tax installment.
#[derive(Debug, Clone, Default)]
pub struct ResidenceTax {
    config: ResidenceTaxConfig,
}

impl ResidenceTax {
    pub fn new(config: ResidenceTaxConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResidenceTaxConfig {
        &self.config
    }

    /// Calculates the monthly residence tax.
    ///
    /// # Arguments
    ///
    /// * `previous_year_income` - Gross annual income of the previous year
    /// * `previous_year_social_insurance` - Social insurance paid in the previous year
    /// * `dependents` - Dependents claimed in the previous year
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError`] if either amount is negative or too large to
    /// tax, or the configuration is invalid.
    pub fn calculate(
        &self,
        previous_year_income: Decimal,
        previous_year_social_insurance: Decimal,
        dependents: u32,
    ) -> Result<ResidenceTaxResult, PayrollError> {
        self.config.validate()?;
        ensure_non_negative("previous year income", previous_year_income)?;
        ensure_non_negative(
            "previous year social insurance",
            previous_year_social_insurance,
        )?;

        let dependent_deduction = checked_product(
            "dependent deduction",
            self.config.dependent_deduction,
            Decimal::from(dependents),
        )?;
        let deductions = checked_sum(
            "residence tax deductions",
            [
                self.config.employment_income_deduction,
                self.config.basic_deduction,
                dependent_deduction,
                previous_year_social_insurance,
            ],
        )?;
        let taxable_income = (previous_year_income - deductions).max(Decimal::ZERO);

        let combined_rate = self.config.municipal_tax_rate + self.config.prefectural_tax_rate;
        let income_levy = checked_product("taxable income", taxable_income, combined_rate)?;
        let annual_tax = checked_sum("residence tax", [income_levy, self.config.per_capita_tax])?;
        let monthly_tax = round_to_yen(annual_tax / MONTHS_PER_YEAR);

        debug!(
            previous_year_income = %previous_year_income,
            taxable_income = %taxable_income,
            annual_tax = %annual_tax,
            monthly_tax = %monthly_tax,
            "residence tax calculated"
        );

        Ok(ResidenceTaxResult {
            taxable_income,
            annual_tax,
            monthly_tax,
        })
    }
}

/// Monthly residence tax with the default rates and no dependents.
pub fn residence_tax(
    previous_year_income: Decimal,
    previous_year_social_insurance: Decimal,
) -> Result<Decimal, PayrollError> {
    ResidenceTax::default()
        .calculate(previous_year_income, previous_year_social_insurance, 0)
        .map(|result| result.monthly_tax)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn calculate_reference_income() {
        let result = ResidenceTax::default()
            .calculate(dec!(8000000), dec!(1263180), 0)
            .unwrap();

        // 8,000,000 − 1,950,000 − 430,000 − 1,263,180
        assert_eq!(result.taxable_income, dec!(4356820));
        assert_eq!(result.annual_tax, dec!(440682));
        // 440,682 ÷ 12 = 36,723.5, midpoint goes to even
        assert_eq!(result.monthly_tax, dec!(36724));
    }

    #[test]
    fn calculate_floors_taxable_income_at_zero() {
        let result = ResidenceTax::default()
            .calculate(dec!(1000000), dec!(0), 0)
            .unwrap();

        assert_eq!(result.taxable_income, dec!(0));
        assert_eq!(result.annual_tax, dec!(5000));
        // 5,000 ÷ 12 = 416.67
        assert_eq!(result.monthly_tax, dec!(417));
    }

    #[test]
    fn calculate_zero_income_still_owes_per_capita_tax() {
        assert_eq!(residence_tax(dec!(0), dec!(0)), Ok(dec!(417)));
    }

    #[test]
    fn calculate_applies_dependent_deduction() {
        let result = ResidenceTax::default()
            .calculate(dec!(8000000), dec!(1263180), 1)
            .unwrap();

        assert_eq!(result.taxable_income, dec!(4026820));
        // (402,682 + 5,000) ÷ 12 = 33,973.5, midpoint goes to even
        assert_eq!(result.monthly_tax, dec!(33974));
    }

    #[test]
    fn calculate_honours_local_rate_override() {
        let config = ResidenceTaxConfig::default().with_local_rates(dec!(0.08), dec!(0.02));

        let result = ResidenceTax::new(config)
            .calculate(dec!(8000000), dec!(1263180), 0)
            .unwrap();

        assert_eq!(result.annual_tax, dec!(440682));
    }

    #[test]
    fn calculate_rejects_negative_income() {
        let err = ResidenceTax::default()
            .calculate(dec!(-1), dec!(0), 0)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn calculate_rejects_negative_social_insurance() {
        let err = ResidenceTax::default()
            .calculate(dec!(8000000), dec!(-1), 0)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn calculate_rejects_social_insurance_too_large_to_deduct() {
        let result = ResidenceTax::default().calculate(dec!(8000000), Decimal::MAX, 0);

        assert_eq!(
            result,
            Err(PayrollError::AmountTooLarge {
                field: "residence tax deductions",
                value: Decimal::MAX,
            })
        );
    }

    #[test]
    fn calculate_handles_largest_income() {
        let result = ResidenceTax::default()
            .calculate(Decimal::MAX, dec!(0), 0)
            .unwrap();

        assert!(result.monthly_tax > Decimal::ZERO);
    }

    #[test]
    fn calculate_rejects_negative_per_capita_tax() {
        let config = ResidenceTaxConfig {
            per_capita_tax: dec!(-5000),
            ..ResidenceTaxConfig::default()
        };

        let err = ResidenceTax::new(config)
            .calculate(dec!(8000000), dec!(0), 0)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }
}

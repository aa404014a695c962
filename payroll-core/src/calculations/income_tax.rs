//! National income tax withheld from a monthly salary.
//!
//! The monthly salary is annualized, the statutory deductions are taken off,
//! and the result is taxed on the progressive 2025 table. The 2.1%
//! reconstruction surtax is added before the annual amount is spread back over
//! twelve months.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Annual gross = monthly gross × 12 |
//! | 2    | Annual social insurance = (health + pension + employment) × 12 |
//! | 3    | Total deductions = employment income + basic + dependents + social insurance |
//! | 4    | Taxable income = annual gross − total deductions, floored to ¥1,000 |
//! | 5    | Pick the first bracket whose upper bound is ≥ taxable income |
//! | 6    | Base tax = taxable income × rate − bracket deduction |
//! | 7    | Annual tax = base tax × (1 + reconstruction surtax) |
//! | 8    | Monthly tax = annual tax ÷ 12, rounded to the yen |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::calculations::{IncomeTax, IncomeTaxInput};
//!
//! let result = IncomeTax::default()
//!     .calculate(&IncomeTaxInput::new(dec!(847938)))
//!     .unwrap();
//!
//! assert_eq!(result.taxable_income, dec!(6482000));
//! assert_eq!(result.monthly_tax, dec!(73929));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::rounding::{floor_to_thousand, round_to_yen};
use crate::error::{
    checked_product, checked_sum, ensure_fraction, ensure_non_negative, ensure_parameter,
};
use crate::{PayrollError, TaxBracket, national_income_tax_brackets};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Statutory parameters for national income tax. Defaults are the 2025 values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeTaxConfig {
    /// Progressive table, ordered by ascending upper bound. Only the last
    /// bracket may be unbounded.
    pub brackets: Vec<TaxBracket>,

    /// Annual employment income deduction.
    pub employment_income_deduction: Decimal,

    /// Annual basic deduction.
    pub basic_deduction: Decimal,

    /// Annual deduction per dependent.
    pub dependent_deduction: Decimal,

    /// Reconstruction special income tax rate.
    pub reconstruction_surtax_rate: Decimal,
}

impl Default for IncomeTaxConfig {
    fn default() -> Self {
        Self {
            brackets: national_income_tax_brackets(),
            employment_income_deduction: dec!(1950000),
            basic_deduction: dec!(480000),
            dependent_deduction: dec!(380000),
            reconstruction_surtax_rate: dec!(0.021),
        }
    }
}

impl IncomeTaxConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError`] if:
    /// - the bracket table is empty, unsorted, or does not end in an unbounded bracket
    /// - any bracket rate or the surtax rate is not in [0, 1]
    /// - any deduction is negative
    pub fn validate(&self) -> Result<(), PayrollError> {
        let Some((last, bounded)) = self.brackets.split_last() else {
            return Err(PayrollError::InvalidBrackets("no tax brackets provided"));
        };
        if last.upper_bound.is_some() {
            return Err(PayrollError::InvalidBrackets(
                "the last bracket must be unbounded",
            ));
        }

        let mut previous: Option<Decimal> = None;
        for bracket in bounded {
            let Some(upper) = bracket.upper_bound else {
                return Err(PayrollError::InvalidBrackets(
                    "only the last bracket may be unbounded",
                ));
            };
            if previous.is_some_and(|prev| upper <= prev) {
                return Err(PayrollError::InvalidBrackets(
                    "upper bounds must be strictly ascending",
                ));
            }
            previous = Some(upper);
        }

        for bracket in &self.brackets {
            ensure_fraction("tax bracket rate", bracket.rate)?;
            ensure_parameter("tax bracket deduction", bracket.deduction)?;
        }

        ensure_parameter(
            "employment income deduction",
            self.employment_income_deduction,
        )?;
        ensure_parameter("basic deduction", self.basic_deduction)?;
        ensure_parameter("dependent deduction", self.dependent_deduction)?;
        ensure_fraction("reconstruction surtax rate", self.reconstruction_surtax_rate)?;
        Ok(())
    }
}

/// Per-employee inputs for the income tax calculation.
///
/// The social insurance amounts are the monthly figures withheld for health,
/// pension and employment insurance. [`IncomeTaxInput::new`] fills them with
/// example payslip values; pass the real premiums with
/// [`IncomeTaxInput::with_social_insurance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxInput {
    pub monthly_gross: Decimal,
    pub dependents: u32,
    pub health_insurance: Decimal,
    pub pension: Decimal,
    pub employment_insurance: Decimal,
}

impl IncomeTaxInput {
    pub fn new(monthly_gross: Decimal) -> Self {
        Self {
            monthly_gross,
            dependents: 0,
            health_insurance: dec!(41126),
            pension: dec!(59475),
            employment_insurance: dec!(4664),
        }
    }

    pub fn with_dependents(
        mut self,
        dependents: u32,
    ) -> Self {
        self.dependents = dependents;
        self
    }

    pub fn with_social_insurance(
        mut self,
        health_insurance: Decimal,
        pension: Decimal,
        employment_insurance: Decimal,
    ) -> Self {
        self.health_insurance = health_insurance;
        self.pension = pension;
        self.employment_insurance = employment_insurance;
        self
    }
}

/// Result of the income tax calculation, with intermediate values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxResult {
    pub annual_gross: Decimal,
    pub total_deductions: Decimal,

    /// Annual taxable income floored to ¥1,000. Not clamped: it is negative
    /// when deductions exceed income.
    pub taxable_income: Decimal,

    /// Bracket the taxable income fell into.
    pub bracket: TaxBracket,

    pub base_tax: Decimal,

    /// Base tax plus the reconstruction surtax.
    pub annual_tax: Decimal,

    /// Amount withheld each month, never below zero.
    pub monthly_tax: Decimal,
}

/// Calculator for monthly national income tax withholding.
#[derive(Debug, Clone, Default)]
pub struct IncomeTax {
    config: IncomeTaxConfig,
}

impl IncomeTax {
    pub fn new(config: IncomeTaxConfig) -> Self {
        Self { config }
    }

    /// Calculates the monthly income tax.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError`] if the monthly gross or any social insurance
    /// amount is negative or too large to annualize, or the configuration is
    /// invalid.
    pub fn calculate(
        &self,
        input: &IncomeTaxInput,
    ) -> Result<IncomeTaxResult, PayrollError> {
        self.config.validate()?;
        ensure_non_negative("monthly gross", input.monthly_gross)?;
        ensure_non_negative("health insurance", input.health_insurance)?;
        ensure_non_negative("pension", input.pension)?;
        ensure_non_negative("employment insurance", input.employment_insurance)?;

        let annual_gross = checked_product("monthly gross", input.monthly_gross, MONTHS_PER_YEAR)?;
        let total_deductions = self.total_deductions(input)?;
        let taxable_income = floor_to_thousand(annual_gross - total_deductions);
        let bracket = self.bracket_for(taxable_income)?;

        let base_tax = taxable_income * bracket.rate - bracket.deduction;
        let annual_tax = checked_product(
            "base tax",
            base_tax,
            Decimal::ONE + self.config.reconstruction_surtax_rate,
        )?;
        let monthly_tax = self.monthly_tax(annual_tax);

        debug!(
            annual_gross = %annual_gross,
            total_deductions = %total_deductions,
            taxable_income = %taxable_income,
            rate = %bracket.rate,
            monthly_tax = %monthly_tax,
            "income tax calculated"
        );

        Ok(IncomeTaxResult {
            annual_gross,
            total_deductions,
            taxable_income,
            bracket: bracket.clone(),
            base_tax,
            annual_tax,
            monthly_tax,
        })
    }

    /// Returns the first bracket whose upper bound is at or above `taxable_income`.
    pub fn bracket_for(
        &self,
        taxable_income: Decimal,
    ) -> Result<&TaxBracket, PayrollError> {
        self.config
            .brackets
            .iter()
            .find(|bracket| bracket.covers(taxable_income))
            .ok_or(PayrollError::InvalidBrackets(
                "no bracket covers the taxable income",
            ))
    }

    /// Sums the annual deductions, annualizing the monthly social insurance.
    fn total_deductions(
        &self,
        input: &IncomeTaxInput,
    ) -> Result<Decimal, PayrollError> {
        let monthly_social_insurance = checked_sum(
            "social insurance",
            [
                input.health_insurance,
                input.pension,
                input.employment_insurance,
            ],
        )?;
        let social_insurance =
            checked_product("social insurance", monthly_social_insurance, MONTHS_PER_YEAR)?;
        let dependent_deduction = checked_product(
            "dependent deduction",
            self.config.dependent_deduction,
            Decimal::from(input.dependents),
        )?;

        checked_sum(
            "income tax deductions",
            [
                self.config.employment_income_deduction,
                self.config.basic_deduction,
                dependent_deduction,
                social_insurance,
            ],
        )
    }

    fn monthly_tax(
        &self,
        annual_tax: Decimal,
    ) -> Decimal {
        let monthly = round_to_yen(annual_tax / MONTHS_PER_YEAR);
        if monthly < Decimal::ZERO {
            warn!(
                annual_tax = %annual_tax,
                monthly_tax = %monthly,
                "deductions exceed income; withholding no income tax"
            );
            return Decimal::ZERO;
        }
        monthly
    }
}

/// Monthly income tax with default rates, dependents and social insurance figures.
pub fn income_tax(monthly_gross: Decimal) -> Result<Decimal, PayrollError> {
    IncomeTax::default()
        .calculate(&IncomeTaxInput::new(monthly_gross))
        .map(|result| result.monthly_tax)
}

//! Net salary aggregation.
//!
//! Runs every deduction calculator for one monthly gross salary and derives
//! the take-home pay.
//!
//! The residence tax is fed the current month's pension premium as the
//! "previous year social insurance" figure, and the income tax uses its own
//! default social insurance amounts rather than the premiums computed here.
//! Both are kept for compatibility with existing results.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::calculations::NetSalaryCalculator;
//!
//! let result = NetSalaryCalculator::default()
//!     .calculate(dec!(847938), None)
//!     .unwrap();
//!
//! assert_eq!(result.total_deductions, dec!(243948));
//! assert_eq!(result.net_salary, dec!(603990));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculations::{
    EmploymentInsurance, EmploymentInsuranceConfig, HealthInsurance, HealthInsuranceConfig,
    IncomeTax, IncomeTaxConfig, IncomeTaxInput, PensionInsurance, PensionInsuranceConfig,
    ResidenceTax, ResidenceTaxConfig,
};
use crate::error::checked_product;
use crate::{DeductionBreakdown, NetSalaryResult, PayrollError, SalaryInput};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Rate parameters for every deduction, one table per calculator.
///
/// Missing tables fall back to the 2025 defaults when deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    pub health_insurance: HealthInsuranceConfig,
    pub pension: PensionInsuranceConfig,
    pub employment_insurance: EmploymentInsuranceConfig,
    pub income_tax: IncomeTaxConfig,
    pub residence_tax: ResidenceTaxConfig,
}

impl PayrollConfig {
    pub fn validate(&self) -> Result<(), PayrollError> {
        self.health_insurance.validate()?;
        self.pension.validate()?;
        self.employment_insurance.validate()?;
        self.income_tax.validate()?;
        self.residence_tax.validate()?;
        Ok(())
    }
}

/// Runs all five deduction calculators and aggregates the result.
#[derive(Debug, Clone, Default)]
pub struct NetSalaryCalculator {
    health_insurance: HealthInsurance,
    pension: PensionInsurance,
    employment_insurance: EmploymentInsurance,
    income_tax: IncomeTax,
    residence_tax: ResidenceTax,
}

impl NetSalaryCalculator {
    pub fn new(config: PayrollConfig) -> Self {
        Self {
            health_insurance: HealthInsurance::new(config.health_insurance),
            pension: PensionInsurance::new(config.pension),
            employment_insurance: EmploymentInsurance::new(config.employment_insurance),
            income_tax: IncomeTax::new(config.income_tax),
            residence_tax: ResidenceTax::new(config.residence_tax),
        }
    }

    /// Calculates the net salary for `monthly_gross`.
    ///
    /// When `previous_year_income` is `None`, twelve times `monthly_gross` is
    /// used for residence tax.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError`] if `monthly_gross` is zero, negative or too
    /// large to annualize, or if any calculator rejects its input or
    /// configuration.
    pub fn calculate(
        &self,
        monthly_gross: Decimal,
        previous_year_income: Option<Decimal>,
    ) -> Result<NetSalaryResult, PayrollError> {
        self.aggregate(monthly_gross, previous_year_income, 0, &self.residence_tax)
    }

    /// Calculates the net salary for a validated [`SalaryInput`].
    ///
    /// Dependents are passed to both taxes and the input's local tax rates
    /// replace the configured residence tax rates.
    pub fn calculate_for(
        &self,
        input: &SalaryInput,
    ) -> Result<NetSalaryResult, PayrollError> {
        input.validate()?;

        let residence_tax =
            ResidenceTax::new(input.residence_tax_config(self.residence_tax.config()));

        self.aggregate(
            input.monthly_salary,
            input.previous_year_income,
            input.dependents,
            &residence_tax,
        )
    }

    fn aggregate(
        &self,
        monthly_gross: Decimal,
        previous_year_income: Option<Decimal>,
        dependents: u32,
        residence_tax: &ResidenceTax,
    ) -> Result<NetSalaryResult, PayrollError> {
        if monthly_gross <= Decimal::ZERO {
            return Err(PayrollError::NonPositiveAmount {
                field: "monthly gross",
                value: monthly_gross,
            });
        }
        let previous_year_income = match previous_year_income {
            Some(income) => income,
            None => checked_product("monthly gross", monthly_gross, MONTHS_PER_YEAR)?,
        };

        let health_insurance = self.health_insurance.calculate(monthly_gross)?;
        let pension = self.pension.calculate(monthly_gross)?;
        let employment_insurance = self.employment_insurance.calculate(monthly_gross)?;
        let income_tax = self
            .income_tax
            .calculate(&IncomeTaxInput::new(monthly_gross).with_dependents(dependents))?;
        let resident_tax = residence_tax.calculate(
            previous_year_income,
            pension.employee_premium,
            dependents,
        )?;

        let deductions = DeductionBreakdown {
            health_insurance: health_insurance.employee_premium,
            pension: pension.employee_premium,
            employment_insurance,
            income_tax: income_tax.monthly_tax,
            resident_tax: resident_tax.monthly_tax,
        };

        let total_deductions = deductions.total();
        let net_salary = monthly_gross - total_deductions;
        let retention_rate = net_salary / monthly_gross;

        info!(
            gross = %monthly_gross,
            total_deductions = %total_deductions,
            net_salary = %net_salary,
            "net salary calculated"
        );

        Ok(NetSalaryResult {
            gross_salary: monthly_gross,
            deductions,
            total_deductions,
            net_salary,
            retention_rate,
        })
    }
}

/// Net salary with the default 2025 rates.
pub fn net_salary(
    monthly_gross: Decimal,
    previous_year_income: Option<Decimal>,
) -> Result<NetSalaryResult, PayrollError> {
    NetSalaryCalculator::default().calculate(monthly_gross, previous_year_income)
}

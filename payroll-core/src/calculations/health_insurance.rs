//! Health insurance premium for employees.
//!
//! The premium is a flat rate on the insured salary, split between employer
//! and employee. The insured salary is zero below the lowest standard
//! remuneration grade and saturates at the highest grade.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::calculations::{HealthInsurance, HealthInsuranceConfig};
//!
//! let calculator = HealthInsurance::new(HealthInsuranceConfig::default());
//! let premium = calculator.calculate(dec!(847938)).unwrap();
//!
//! assert_eq!(premium.insured_salary, dec!(847938));
//! assert_eq!(premium.employee_premium, dec!(40998));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::rounding::round_to_yen;
use crate::error::{ensure_fraction, ensure_non_negative, ensure_parameter};
use crate::{InsurancePremium, PayrollError};

/// Rate parameters for the health insurance premium.
///
/// Defaults are the 2025 Ibaraki association rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthInsuranceConfig {
    /// Combined employer and employee rate.
    pub rate: Decimal,

    /// Fraction of the combined premium paid by the employee.
    pub employee_share: Decimal,

    /// Salaries below this amount are not insured.
    pub lower_cap: Decimal,

    /// Maximum insured monthly salary.
    pub upper_cap: Decimal,
}

impl Default for HealthInsuranceConfig {
    fn default() -> Self {
        Self {
            rate: dec!(0.0967),
            employee_share: dec!(0.5),
            lower_cap: dec!(58000),
            upper_cap: dec!(1390000),
        }
    }
}

impl HealthInsuranceConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError`] if:
    /// - `rate` or `employee_share` is not in [0, 1]
    /// - either cap is negative
    /// - `lower_cap` is greater than `upper_cap`
    pub fn validate(&self) -> Result<(), PayrollError> {
        ensure_fraction("health insurance rate", self.rate)?;
        ensure_fraction("health insurance employee share", self.employee_share)?;
        ensure_parameter("health insurance lower cap", self.lower_cap)?;
        ensure_parameter("health insurance upper cap", self.upper_cap)?;
        if self.lower_cap > self.upper_cap {
            return Err(PayrollError::InvertedSalaryRange {
                lower: self.lower_cap,
                upper: self.upper_cap,
            });
        }
        Ok(())
    }
}

/// Calculator for the employee's monthly health insurance premium.
#[derive(Debug, Clone, Default)]
pub struct HealthInsurance {
    config: HealthInsuranceConfig,
}

impl HealthInsurance {
    pub fn new(config: HealthInsuranceConfig) -> Self {
        Self { config }
    }

    /// Calculates the monthly premium for `monthly_salary`.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError`] if the salary is negative or the
    /// configuration is invalid.
    pub fn calculate(
        &self,
        monthly_salary: Decimal,
    ) -> Result<InsurancePremium, PayrollError> {
        self.config.validate()?;
        ensure_non_negative("monthly salary", monthly_salary)?;

        let insured_salary = self.insured_salary(monthly_salary);
        let total_premium = insured_salary * self.config.rate;
        let employee_premium = round_to_yen(total_premium * self.config.employee_share);

        debug!(
            monthly_salary = %monthly_salary,
            insured_salary = %insured_salary,
            employee_premium = %employee_premium,
            "health insurance premium calculated"
        );

        Ok(InsurancePremium {
            insured_salary,
            total_premium,
            employee_premium,
        })
    }

    /// Applies the floor and cap. The floor is inclusive.
    fn insured_salary(
        &self,
        monthly_salary: Decimal,
    ) -> Decimal {
        if monthly_salary < self.config.lower_cap {
            Decimal::ZERO
        } else {
            monthly_salary.min(self.config.upper_cap)
        }
    }
}

/// Employee health insurance premium with the default 2025 rates.
pub fn health_insurance_premium(monthly_salary: Decimal) -> Result<Decimal, PayrollError> {
    HealthInsurance::default()
        .calculate(monthly_salary)
        .map(|premium| premium.employee_premium)
}

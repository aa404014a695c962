//! Employment insurance premium.
//!
//! The employee pays a flat rate on the full salary; there is no cap. The
//! premium is rounded with the traditional withholding rule by default, where
//! fractions of exactly 50 sen are dropped.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::PayrollError;
use crate::calculations::rounding::{round_half_down, round_to_yen};
use crate::error::{ensure_fraction, ensure_non_negative};

/// How the raw premium is turned into whole yen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremiumRounding {
    /// Round up only when the fraction exceeds 0.5.
    #[default]
    Traditional,
    /// Round to the nearest yen.
    Nearest,
}

/// Rate parameters for employment insurance. Defaults are the 2025 general business values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentInsuranceConfig {
    /// Employee's rate.
    pub rate: Decimal,
    pub rounding: PremiumRounding,
}

impl Default for EmploymentInsuranceConfig {
    fn default() -> Self {
        Self {
            rate: dec!(0.0055),
            rounding: PremiumRounding::Traditional,
        }
    }
}

impl EmploymentInsuranceConfig {
    pub fn validate(&self) -> Result<(), PayrollError> {
        ensure_fraction("employment insurance rate", self.rate)
    }
}

/// Calculator for the employee's monthly employment insurance premium.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::EmploymentInsurance;
///
/// let calculator = EmploymentInsurance::default();
///
/// assert_eq!(calculator.calculate(dec!(847938)), Ok(dec!(4664)));
/// assert_eq!(calculator.calculate(dec!(500000)), Ok(dec!(2750)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmploymentInsurance {
    config: EmploymentInsuranceConfig,
}

impl EmploymentInsurance {
    pub fn new(config: EmploymentInsuranceConfig) -> Self {
        Self { config }
    }

    /// Calculates the monthly premium for `monthly_salary`, in whole yen.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError`] if the salary is negative or the rate is out of range.
    pub fn calculate(
        &self,
        monthly_salary: Decimal,
    ) -> Result<Decimal, PayrollError> {
        self.config.validate()?;
        ensure_non_negative("monthly salary", monthly_salary)?;

        let raw_premium = monthly_salary * self.config.rate;
        let premium = match self.config.rounding {
            PremiumRounding::Traditional => round_half_down(raw_premium),
            PremiumRounding::Nearest => round_to_yen(raw_premium),
        };

        debug!(
            monthly_salary = %monthly_salary,
            raw_premium = %raw_premium,
            premium = %premium,
            "employment insurance premium calculated"
        );

        Ok(premium)
    }
}

/// Employee employment insurance premium with the default 2025 rate.
pub fn employment_insurance_premium(monthly_salary: Decimal) -> Result<Decimal, PayrollError> {
    EmploymentInsurance::default().calculate(monthly_salary)
}

//! Employees' pension insurance premium.
//!
//! Same shape as health insurance, but there is no lower floor: every salary
//! up to the cap is insured.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::rounding::round_to_yen;
use crate::error::{ensure_fraction, ensure_non_negative, ensure_parameter};
use crate::{InsurancePremium, PayrollError};

/// Rate parameters for the pension premium. Defaults are the 2025 national values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PensionInsuranceConfig {
    pub rate: Decimal,
    pub employee_share: Decimal,

    /// Maximum insured monthly salary.
    pub cap: Decimal,
}

impl Default for PensionInsuranceConfig {
    fn default() -> Self {
        Self {
            rate: dec!(0.183),
            employee_share: dec!(0.5),
            cap: dec!(650000),
        }
    }
}

impl PensionInsuranceConfig {
    pub fn validate(&self) -> Result<(), PayrollError> {
        ensure_fraction("pension rate", self.rate)?;
        ensure_fraction("pension employee share", self.employee_share)?;
        ensure_parameter("pension cap", self.cap)?;
        Ok(())
    }
}

/// Calculator for the employee's monthly pension premium.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::PensionInsurance;
///
/// let calculator = PensionInsurance::default();
///
/// assert_eq!(calculator.calculate(dec!(500000)).unwrap().employee_premium, dec!(45750));
/// assert_eq!(calculator.calculate(dec!(847938)).unwrap().employee_premium, dec!(59475));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PensionInsurance {
    config: PensionInsuranceConfig,
}

impl PensionInsurance {
    pub fn new(config: PensionInsuranceConfig) -> Self {
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

        let insured_salary = monthly_salary.min(self.config.cap);
        let total_premium = insured_salary * self.config.rate;
        let employee_premium = round_to_yen(total_premium * self.config.employee_share);

        debug!(
            monthly_salary = %monthly_salary,
            insured_salary = %insured_salary,
            employee_premium = %employee_premium,
            "pension premium calculated"
        );

        Ok(InsurancePremium {
            insured_salary,
            total_premium,
            employee_premium,
        })
    }
}

/// Employee pension premium with the default 2025 rates.
pub fn pension_insurance_premium(monthly_salary: Decimal) -> Result<Decimal, PayrollError> {
    PensionInsurance::default()
        .calculate(monthly_salary)
        .map(|premium| premium.employee_premium)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn calculate_below_cap() {
        let premium = PensionInsurance::default().calculate(dec!(500000)).unwrap();

        assert_eq!(premium.insured_salary, dec!(500000));
        assert_eq!(premium.total_premium, dec!(91500));
        assert_eq!(premium.employee_premium, dec!(45750));
    }

    #[test]
    fn calculate_above_cap_uses_cap() {
        let premium = PensionInsurance::default().calculate(dec!(847938)).unwrap();

        assert_eq!(premium.insured_salary, dec!(650000));
        assert_eq!(premium.employee_premium, dec!(59475));
    }

    #[test]
    fn calculate_never_exceeds_capped_premium() {
        for salary in [dec!(650000), dec!(650001), dec!(10000000)] {
            let premium = PensionInsurance::default().calculate(salary).unwrap();

            assert_eq!(premium.employee_premium, dec!(59475));
        }
    }

    #[test]
    fn calculate_has_no_lower_floor() {
        let premium = PensionInsurance::default().calculate(dec!(10000)).unwrap();

        // 10,000 × 18.3% × 50% = 915
        assert_eq!(premium.employee_premium, dec!(915));
    }

    #[test]
    fn calculate_rejects_negative_salary() {
        let err = PensionInsurance::default().calculate(dec!(-500)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn calculate_rejects_employee_share_above_one() {
        let config = PensionInsuranceConfig {
            employee_share: dec!(1.5),
            ..PensionInsuranceConfig::default()
        };

        let result = PensionInsurance::new(config).calculate(dec!(300000));

        assert_eq!(
            result,
            Err(PayrollError::RateOutOfRange {
                field: "pension employee share",
                value: dec!(1.5),
            })
        );
    }

    #[test]
    fn convenience_function_uses_defaults() {
        assert_eq!(pension_insurance_premium(dec!(500000)), Ok(dec!(45750)));
    }
}

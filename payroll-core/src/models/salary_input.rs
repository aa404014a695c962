use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::PayrollError;
use crate::calculations::ResidenceTaxConfig;
use crate::error::{ensure_fraction, ensure_non_negative};

/// Prefecture whose insurance rates the default configuration reflects.
pub const DEFAULT_PREFECTURE: &str = "ibaraki";

/// Caller-supplied description of one employee's month.
///
/// This is the validation boundary in front of the calculators: it checks the
/// shape of the input once, so the net salary aggregator can rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Gross monthly salary in yen.
    pub monthly_salary: Decimal,

    /// Resident prefecture. Informational; only one rate set is supported.
    #[serde(default = "default_prefecture")]
    pub prefecture: String,

    /// Number of dependents claimed.
    #[serde(default)]
    pub dependents: u32,

    /// Previous year's annual income for residence tax.
    /// When absent, twelve times the monthly salary is assumed.
    #[serde(default)]
    pub previous_year_income: Option<Decimal>,

    /// Municipal residence tax rate.
    #[serde(default = "default_municipal_tax_rate")]
    pub municipal_tax_rate: Decimal,

    /// Prefectural residence tax rate.
    #[serde(default = "default_prefectural_tax_rate")]
    pub prefectural_tax_rate: Decimal,
}

fn default_prefecture() -> String {
    DEFAULT_PREFECTURE.to_string()
}

fn default_municipal_tax_rate() -> Decimal {
    dec!(0.06)
}

fn default_prefectural_tax_rate() -> Decimal {
    dec!(0.04)
}

impl SalaryInput {
    /// Creates an input for `monthly_salary` with every other field at its default.
    pub fn new(monthly_salary: Decimal) -> Self {
        Self {
            monthly_salary,
            prefecture: default_prefecture(),
            dependents: 0,
            previous_year_income: None,
            municipal_tax_rate: default_municipal_tax_rate(),
            prefectural_tax_rate: default_prefectural_tax_rate(),
        }
    }

    pub fn with_dependents(
        mut self,
        dependents: u32,
    ) -> Self {
        self.dependents = dependents;
        self
    }

    pub fn with_previous_year_income(
        mut self,
        previous_year_income: Option<Decimal>,
    ) -> Self {
        self.previous_year_income = previous_year_income;
        self
    }

    pub fn with_prefecture(
        mut self,
        prefecture: impl Into<String>,
    ) -> Self {
        self.prefecture = prefecture.into();
        self
    }

    /// Returns `base` with this input's municipal and prefectural rates.
    pub fn residence_tax_config(
        &self,
        base: &ResidenceTaxConfig,
    ) -> ResidenceTaxConfig {
        base.with_local_rates(self.municipal_tax_rate, self.prefectural_tax_rate)
    }

    /// Validates the input.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError`] if:
    /// - `monthly_salary` is zero or negative
    /// - `prefecture` is blank
    /// - `previous_year_income` is present and negative
    /// - either residence tax rate is outside [0, 1]
    pub fn validate(&self) -> Result<(), PayrollError> {
        if self.monthly_salary <= Decimal::ZERO {
            return Err(PayrollError::NonPositiveAmount {
                field: "monthly salary",
                value: self.monthly_salary,
            });
        }
        if self.prefecture.trim().is_empty() {
            return Err(PayrollError::MissingField("prefecture"));
        }
        if let Some(income) = self.previous_year_income {
            ensure_non_negative("previous year income", income)?;
        }
        ensure_fraction("municipal tax rate", self.municipal_tax_rate)?;
        ensure_fraction("prefectural tax rate", self.prefectural_tax_rate)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn new_applies_defaults() {
        let input = SalaryInput::new(dec!(300000));

        assert_eq!(input.prefecture, "ibaraki");
        assert_eq!(input.dependents, 0);
        assert_eq!(input.previous_year_income, None);
        assert_eq!(input.municipal_tax_rate, dec!(0.06));
        assert_eq!(input.prefectural_tax_rate, dec!(0.04));
    }

    #[test]
    fn validate_accepts_typical_input() {
        let input = SalaryInput::new(dec!(300000))
            .with_dependents(2)
            .with_previous_year_income(Some(dec!(3600000)));

        assert_eq!(input.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_salary() {
        let err = SalaryInput::new(dec!(0)).validate().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn validate_rejects_blank_prefecture() {
        let input = SalaryInput::new(dec!(300000)).with_prefecture("  ");

        assert_eq!(
            input.validate(),
            Err(PayrollError::MissingField("prefecture"))
        );
    }

    #[test]
    fn validate_rejects_negative_previous_year_income() {
        let input = SalaryInput::new(dec!(300000)).with_previous_year_income(Some(dec!(-1)));

        assert_eq!(
            input.validate(),
            Err(PayrollError::NegativeAmount {
                field: "previous year income",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn validate_rejects_out_of_range_tax_rate() {
        let mut input = SalaryInput::new(dec!(300000));
        input.municipal_tax_rate = dec!(1.5);

        assert_eq!(
            input.validate().map_err(|e| e.kind()),
            Err(ErrorKind::InvalidConfiguration)
        );
    }

    #[test]
    fn residence_tax_config_overrides_only_local_rates() {
        let mut input = SalaryInput::new(dec!(300000));
        input.municipal_tax_rate = dec!(0.05);
        input.prefectural_tax_rate = dec!(0.03);
        let base = ResidenceTaxConfig {
            per_capita_tax: dec!(6000),
            ..ResidenceTaxConfig::default()
        };

        let config = input.residence_tax_config(&base);

        assert_eq!(config.municipal_tax_rate, dec!(0.05));
        assert_eq!(config.prefectural_tax_rate, dec!(0.03));
        assert_eq!(config.per_capita_tax, dec!(6000));
        assert_eq!(config.basic_deduction, base.basic_deduction);
    }

    #[test]
    fn deserialize_fills_missing_fields_with_defaults() {
        let input: SalaryInput = toml::from_str(r#"monthly_salary = "450000""#).unwrap();

        assert_eq!(input, SalaryInput::new(dec!(450000)));
    }
}

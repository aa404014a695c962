use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PayrollError;
use crate::error::ensure_non_negative;

/// Monthly deductions withheld from gross salary, one field per deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    pub health_insurance: Decimal,
    pub pension: Decimal,
    pub employment_insurance: Decimal,
    pub income_tax: Decimal,
    pub resident_tax: Decimal,
}

impl DeductionBreakdown {
    /// Deduction names paired with their amounts, in withholding order.
    pub fn entries(&self) -> [(&'static str, Decimal); 5] {
        [
            ("health_insurance", self.health_insurance),
            ("pension", self.pension),
            ("employment_insurance", self.employment_insurance),
            ("income_tax", self.income_tax),
            ("resident_tax", self.resident_tax),
        ]
    }

    /// Sum of every deduction.
    pub fn total(&self) -> Decimal {
        self.entries().iter().map(|(_, amount)| *amount).sum()
    }

    /// Fails if any deduction is negative.
    pub fn validate_non_negative(&self) -> Result<(), PayrollError> {
        for (name, amount) in self.entries() {
            ensure_non_negative(name, amount)?;
        }
        Ok(())
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly premium for a salary-linked insurance scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePremium {
    /// Portion of the salary the rate applies to, after the floor and cap.
    pub insured_salary: Decimal,

    /// Combined employer and employee premium, unrounded.
    pub total_premium: Decimal,

    /// Employee's share, rounded to whole yen.
    pub employee_premium: Decimal,
}

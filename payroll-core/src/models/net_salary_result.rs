use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DeductionBreakdown;

/// Net take-home pay for one month and the deductions behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSalaryResult {
    pub gross_salary: Decimal,
    pub deductions: DeductionBreakdown,
    pub total_deductions: Decimal,
    pub net_salary: Decimal,

    /// Net salary divided by gross salary.
    pub retention_rate: Decimal,
}

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One row of a progressive tax table.
///
/// A bracket applies to taxable income up to and including `upper_bound`.
/// The top bracket has no upper bound. Tax for a bracket is
/// `taxable_income * rate - deduction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub deduction: Decimal,
}

impl TaxBracket {
    pub fn new(
        upper_bound: Option<Decimal>,
        rate: Decimal,
        deduction: Decimal,
    ) -> Self {
        Self {
            upper_bound,
            rate,
            deduction,
        }
    }

    /// Whether `taxable_income` falls at or below this bracket's upper bound.
    pub fn covers(
        &self,
        taxable_income: Decimal,
    ) -> bool {
        self.upper_bound.is_none_or(|upper| taxable_income <= upper)
    }
}

/// The 2025 national income tax table, ordered by ascending upper bound.
pub fn national_income_tax_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket::new(Some(dec!(1949000)), dec!(0.05), dec!(0)),
        TaxBracket::new(Some(dec!(3299000)), dec!(0.10), dec!(97500)),
        TaxBracket::new(Some(dec!(6949000)), dec!(0.20), dec!(427500)),
        TaxBracket::new(Some(dec!(8999000)), dec!(0.23), dec!(636000)),
        TaxBracket::new(Some(dec!(17999000)), dec!(0.33), dec!(1536000)),
        TaxBracket::new(Some(dec!(39999000)), dec!(0.40), dec!(2796000)),
        TaxBracket::new(None, dec!(0.45), dec!(4796000)),
    ]
}

mod deduction_breakdown;
mod insurance_premium;
mod net_salary_result;
mod salary_input;
mod tax_bracket;

pub use deduction_breakdown::DeductionBreakdown;
pub use insurance_premium::InsurancePremium;
pub use net_salary_result::NetSalaryResult;
pub use salary_input::{DEFAULT_PREFECTURE, SalaryInput};
pub use tax_bracket::{TaxBracket, national_income_tax_brackets};

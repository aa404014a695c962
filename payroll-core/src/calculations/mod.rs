//! Deduction calculators for Japanese monthly payroll.
//!
//! Each calculator owns a serde-friendly `*Config` with the 2025 statutory
//! defaults and validates it on every call. [`NetSalaryCalculator`] composes
//! all five.

pub mod employment_insurance;
pub mod health_insurance;
pub mod income_tax;
pub mod net_salary;
pub mod pension_insurance;
pub mod residence_tax;
pub mod rounding;

pub use employment_insurance::{
    EmploymentInsurance, EmploymentInsuranceConfig, PremiumRounding,
    employment_insurance_premium,
};
pub use health_insurance::{HealthInsurance, HealthInsuranceConfig, health_insurance_premium};
pub use income_tax::{IncomeTax, IncomeTaxConfig, IncomeTaxInput, IncomeTaxResult, income_tax};
pub use net_salary::{NetSalaryCalculator, PayrollConfig, net_salary};
pub use pension_insurance::{PensionInsurance, PensionInsuranceConfig, pension_insurance_premium};
pub use residence_tax::{ResidenceTax, ResidenceTaxConfig, ResidenceTaxResult, residence_tax};

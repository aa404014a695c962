//! Command-line front end for the payroll deduction calculators.

pub mod amount;
pub mod config;
pub mod logging;
pub mod report;

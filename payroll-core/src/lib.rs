pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{NetSalaryCalculator, PayrollConfig};
pub use error::{ErrorKind, PayrollError};
pub use models::*;

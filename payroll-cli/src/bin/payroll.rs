use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use payroll_cli::amount::parse_amount;
use payroll_cli::config::load_config;
use payroll_cli::logging::{DEFAULT_FILTER, init_tracing};
use payroll_cli::report;
use payroll_core::{DEFAULT_PREFECTURE, NetSalaryCalculator, PayrollConfig, SalaryInput};
use rust_decimal::Decimal;
use tracing::debug;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Japanese monthly payroll deduction calculator.
///
/// Computes health, pension and employment insurance, national income tax and
/// residence tax for a monthly gross salary, and prints the net salary.
#[derive(Debug, Parser)]
#[command(name = "payroll")]
#[command(version, about, long_about = None)]
struct Args {
    /// Gross monthly salary in yen (commas allowed)
    #[arg(short, long, value_parser = parse_amount, default_value = "847938")]
    salary: Decimal,

    /// Previous year's annual income for residence tax (defaults to 12 × salary)
    #[arg(short, long, value_parser = parse_amount)]
    previous_year_income: Option<Decimal>,

    /// Number of dependents claimed
    #[arg(short, long, default_value_t = 0)]
    dependents: u32,

    /// Resident prefecture
    #[arg(long, default_value = DEFAULT_PREFECTURE)]
    prefecture: String,

    /// TOML file with rate overrides
    #[arg(short, long)]
    config: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing(DEFAULT_FILTER);

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => PayrollConfig::default(),
    };

    let input = SalaryInput::new(args.salary)
        .with_dependents(args.dependents)
        .with_previous_year_income(args.previous_year_income)
        .with_prefecture(args.prefecture);
    debug!(?input, "calculating net salary");

    let result = NetSalaryCalculator::new(config)
        .calculate_for(&input)
        .context("Failed to calculate net salary")?;
    // A payslip with a negative deduction is never printed.
    result
        .deductions
        .validate_non_negative()
        .context("Deduction breakdown is invalid")?;

    print!("{}", report::render(&result, &input.prefecture));

    Ok(())
}

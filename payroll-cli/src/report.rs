//! Plain-text rendering of a net salary breakdown.

use std::fmt::Write;

use payroll_core::NetSalaryResult;
use rust_decimal::Decimal;

use crate::amount::format_yen;

const LABEL_WIDTH: usize = 22;
const AMOUNT_WIDTH: usize = 12;

fn label_for(name: &str) -> &str {
    match name {
        "health_insurance" => "Health insurance",
        "pension" => "Pension",
        "employment_insurance" => "Employment insurance",
        "income_tax" => "Income tax",
        "resident_tax" => "Residence tax",
        other => other,
    }
}

/// Retention rate as a percentage with two decimals, e.g. `71.23%`.
pub fn format_percentage(rate: Decimal) -> String {
    format!("{:.2}%", (rate * Decimal::ONE_HUNDRED).round_dp(2))
}

/// Renders the breakdown printed by the `payroll` binary.
pub fn render(
    result: &NetSalaryResult,
    prefecture: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Net salary for {}: {}",
        format_yen(result.gross_salary),
        format_yen(result.net_salary)
    );
    let _ = writeln!(out, "Prefecture: {prefecture}");
    let _ = writeln!(out, "Deductions:");
    for (name, amount) in result.deductions.entries() {
        let _ = writeln!(
            out,
            "  {:<label_width$}{:>amount_width$}",
            label_for(name),
            format_yen(amount),
            label_width = LABEL_WIDTH,
            amount_width = AMOUNT_WIDTH,
        );
    }
    let _ = writeln!(
        out,
        "  {:<label_width$}{:>amount_width$}",
        "Total",
        format_yen(result.total_deductions),
        label_width = LABEL_WIDTH,
        amount_width = AMOUNT_WIDTH,
    );
    let _ = writeln!(
        out,
        "Retention rate: {}",
        format_percentage(result.retention_rate)
    );
    out
}

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a yen amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace, a leading yen sign and commas.
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let trimmed = trimmed
        .strip_prefix('¥')
        .or_else(|| trimmed.strip_prefix('￥'))
        .unwrap_or(trimmed);
    trimmed.replace(',', "")
}

/// Parses a yen amount such as `"847,938"` or `"¥500000"` into a [`Decimal`].
///
/// Used as a clap value parser.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    normalize_amount_input(s)
        .parse()
        .map_err(|source| ParseAmountError {
            input: s.to_string(),
            source,
        })
}

/// Formats a whole-yen amount with thousands separators, e.g. `¥1,234,567`.
///
/// Fractions are dropped; calculator outputs are already whole yen.
pub fn format_yen(amount: Decimal) -> String {
    let whole = amount.trunc().abs().to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount.trunc() < Decimal::ZERO {
        format!("-¥{grouped}")
    } else {
        format!("¥{grouped}")
    }
}

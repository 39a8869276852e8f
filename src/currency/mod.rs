//! Money rounding and formatting helpers shared by the ledger and the CLI.

/// Net positions within this distance of zero are treated as settled.
pub const SETTLEMENT_EPSILON: f64 = 0.001;

/// Allowed distance between a percentage total and 100.
pub const PERCENT_TOLERANCE: f64 = 0.001;

/// Number of fractional digits every stored amount is rounded to.
pub const MINOR_DIGITS: usize = 2;

/// Rounds `value` half away from zero to two fractional digits.
pub fn round_two_decimals(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Normalize negative zero so `-0.00` never reaches a ledger cell.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// True when both values round to the same cent.
pub fn same_cents(a: f64, b: f64) -> bool {
    (round_two_decimals(a) - round_two_decimals(b)).abs() < 0.005
}

/// Renders an amount with exactly two fractional digits.
pub fn format_amount(value: f64) -> String {
    format!("{:.prec$}", round_two_decimals(value), prec = MINOR_DIGITS)
}

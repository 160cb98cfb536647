//! Price formatting for the Argentine peso, no cents.
//!
//! Output matches the es-AR currency style: `$`, a non-breaking space, then the amount
//! with `.` as the thousands separator (`$ 1.500`). Amounts are rounded half away
//! from zero before grouping.

const CURRENCY_SYMBOL: &str = "$";
const SYMBOL_SEPARATOR: char = '\u{a0}';
const GROUP_SEPARATOR: char = '.';

/// Formats an amount in ARS with zero fractional digits.
pub fn format_ars(value: f64) -> String {
    if value.is_nan() {
        return format!("{}{}NaN", CURRENCY_SYMBOL, SYMBOL_SEPARATOR);
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };

    let amount = if rounded.is_infinite() {
        "∞".to_string()
    } else {
        group_thousands(&format!("{:.0}", rounded.abs()))
    };

    format!("{}{}{}{}", sign, CURRENCY_SYMBOL, SYMBOL_SEPARATOR, amount)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

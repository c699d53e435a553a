//! Locale-independent number formatting shared by the renderers.

/// Format a count with comma thousands separators, e.g. `-1234567` -> `-1,234,567`.
///
/// Values are rounded to the nearest integer.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `+` for strictly positive numbers; negatives carry their own sign.
pub fn plus_sign(value: f64) -> &'static str {
    if value > 0.0 { "+" } else { "" }
}

/// Signed, grouped delta, e.g. `+1,024` or `-20`.
pub fn format_delta(delta: f64) -> String {
    format!("{}{}", plus_sign(delta), group_thousands(delta))
}

/// Signed percentage with two decimals, or `∞` for a zero baseline.
pub fn format_percentage(percentage: f64) -> String {
    let value = if percentage.is_infinite() {
        if percentage < 0.0 { "-∞".to_string() } else { "∞".to_string() }
    } else {
        format!("{percentage:.2}")
    };
    format!("{}{value}%", plus_sign(percentage))
}

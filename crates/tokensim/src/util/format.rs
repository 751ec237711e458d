/// Insert `,` every three digits of a whole number
fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a currency value with thousands separators, e.g. `$14,700.00`
pub fn format_currency(value: f64) -> String {
    let cents_total = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents_total > 0 { "-" } else { "" };
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(cents_total / 100),
        cents_total % 100
    )
}

/// Format a token count with thousands separators
pub fn format_tokens(tokens: u64) -> String {
    group_thousands(tokens)
}

/// Format a fraction as a percentage, e.g. `0.5` -> `50.00%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format a currency value in compact form (e.g., $2.1M, $450K, $50)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}${:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs_value)
    }
}

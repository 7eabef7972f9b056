//! Formatting helpers for axis labels and inline styles.

/// Compact tick label: integers without decimals, otherwise up to two
/// significant decimals with trailing zeros trimmed.
pub fn format_tick(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    // Avoid "-0" for values that round to zero.
    let value = if value.abs() < 1e-9 { 0.0 } else { value };
    if (value - value.round()).abs() < 1e-9 {
        return format!("{value:.0}");
    }
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Pixel length for inline CSS.
pub fn px(value: u32) -> String {
    format!("{value}px")
}

/// Percentage for inline CSS / labels, one decimal.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

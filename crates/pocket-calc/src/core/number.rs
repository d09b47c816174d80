//! Conversions between the display string and `f64`

/// Renders a value as the shortest decimal string that round-trips
///
/// Negative zero renders as `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Parses the display text
///
/// The display only ever holds digits, one point and an optional leading
/// minus, so the zero fallback is not reachable through the engine.
#[must_use]
pub fn parse_display(display: &str) -> f64 {
    display.parse().unwrap_or(0.0)
}

//! Formatting helpers for presenting shares. Rounding happens here only.

/// One-decimal percentage, e.g. `17.4%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Signed one-decimal change. Non-negative deltas (zero included) get a `+`.
pub fn format_change(delta: f64) -> String {
    if delta >= 0.0 {
        // `abs` folds -0.0 into 0.0 so it prints as "+0.0%".
        format!("+{:.1}%", delta.abs())
    } else {
        format!("{delta:.1}%")
    }
}

/// Axis tick label: whole numbers without decimals, e.g. `40%`.
pub fn format_tick(value: f64, suffix: &str) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}{suffix}")
    } else {
        format!("{value:.1}{suffix}")
    }
}

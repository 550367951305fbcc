//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Utc};

/// Format a UTC instant for table cells.
///
/// # Example output
/// `2026-05-01 18:00`
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Render the time remaining until a payment deadline.
///
/// The deadline comes from the server; the countdown is recomputed from the
/// wall clock at render time rather than pushed.
///
/// # Example output
/// - `1h 23m 45s`
/// - `9m 02s`
/// - `expired`
pub fn format_countdown(deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = deadline.signed_duration_since(now);
    let total_secs = remaining.num_seconds();

    if total_secs <= 0 {
        return "expired".to_string();
    }

    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {:02}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Format a price in the smallest currency unit with thousands separators.
///
/// # Example output
/// - `150,000`
/// - `free` for zero
pub fn format_price(amount: u64) -> String {
    if amount == 0 {
        return "free".to_string();
    }

    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

//! Time utilities: rendering and parsing stopwatch durations.

use crate::config::TimeFormat;
use crate::errors::{AppError, AppResult};

const MILLIS_PER_SECOND: i64 = 1000;

/// `HH:MM:SS`. Hours are not capped at 24; sub-second remainders are dropped.
pub fn format_millis(millis: i64) -> String {
    let secs = millis.max(0) / MILLIS_PER_SECOND;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// `1h 02m 03s`, `2m 05s` or `7s`.
pub fn format_compact(millis: i64) -> String {
    let secs = millis.max(0) / MILLIS_PER_SECOND;
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}h {:02}m {:02}s", h, m, s)
    } else if m > 0 {
        format!("{}m {:02}s", m, s)
    } else {
        format!("{}s", s)
    }
}

pub fn render(millis: i64, fmt: TimeFormat) -> String {
    match fmt {
        TimeFormat::Hms => format_millis(millis),
        TimeFormat::Compact => format_compact(millis),
    }
}

/// Parse `HH:MM:SS`, `MM:SS` or plain seconds into whole milliseconds.
pub fn parse_hms(input: &str) -> AppResult<i64> {
    let invalid = || AppError::InvalidDuration(input.to_string());

    let parts: Vec<&str> = input.trim().split(':').collect();
    if parts.is_empty() || parts.len() > 3 {
        return Err(invalid());
    }

    let mut nums = Vec::with_capacity(parts.len());
    for p in &parts {
        if p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        nums.push(p.parse::<i64>().map_err(|_| invalid())?);
    }

    // minutes and seconds must stay below 60 once a larger unit is present
    if nums.len() > 1 && nums[1..].iter().any(|&n| n >= 60) {
        return Err(invalid());
    }

    nums.iter()
        .try_fold(0i64, |acc, &n| acc.checked_mul(60)?.checked_add(n))
        .and_then(|secs| secs.checked_mul(MILLIS_PER_SECOND))
        .ok_or_else(invalid)
}

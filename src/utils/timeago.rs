use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 3600;
const DAY: i64 = 86_400;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Relative-time string for a timestamp, e.g. "3 hours ago" or "in 2 days".
/// `now` is supplied by the caller so output stays deterministic.
pub(crate) fn time_ago(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(ts).num_seconds();
    if delta.abs() < MINUTE {
        return "just now".to_string();
    }
    let (amount, unit) = split_units(delta.abs());
    if delta > 0 {
        format!("{} ago", pluralize(amount, unit))
    } else {
        format!("in {}", pluralize(amount, unit))
    }
}

fn split_units(secs: i64) -> (i64, &'static str) {
    if secs < HOUR {
        (secs / MINUTE, "minute")
    } else if secs < DAY {
        (secs / HOUR, "hour")
    } else if secs < MONTH {
        (secs / DAY, "day")
    } else if secs < YEAR {
        (secs / MONTH, "month")
    } else {
        (secs / YEAR, "year")
    }
}

fn pluralize(amount: i64, unit: &str) -> String {
    if amount == 1 {
        format!("1 {unit}")
    } else {
        format!("{amount} {unit}s")
    }
}

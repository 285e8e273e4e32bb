use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses the timestamp shapes the backend emits: RFC 3339, naive ISO
/// date-time (taken as UTC) or a bare date.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `Mar 5, 2025`, or the input unchanged when it is not a date.
pub fn format_short_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|at| at.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// `March 5, 2025 at 2:30 PM UTC`, or the input unchanged when it is not a
/// date.
pub fn format_absolute(value: &str) -> String {
    parse_timestamp(value)
        .map(|at| at.format("%B %-d, %Y at %-I:%M %p UTC").to_string())
        .unwrap_or_else(|| value.to_string())
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// Coarse age of `value` relative to `now`.
///
/// Returns `None` for unparseable input. Timestamps in the future read as
/// "just now".
pub fn relative_time(value: &str, now: DateTime<Utc>) -> Option<String> {
    let then = parse_timestamp(value)?;
    let seconds = (now - then).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = seconds / 3_600;
    let days = seconds / 86_400;
    let weeks = days / 7;
    let months = days / 30;
    let years = days / 365;

    let text = if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if weeks == 1 {
        "last week".to_string()
    } else if weeks < 4 {
        format!("{} weeks ago", weeks)
    } else if months <= 1 {
        "last month".to_string()
    } else if months < 12 {
        format!("{} months ago", months)
    } else if years <= 1 {
        "last year".to_string()
    } else {
        format!("{} years ago", years)
    };
    Some(text)
}

//! Derived display metrics: latency and estimated cost

use chrono::{DateTime, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an RFC 3339 timestamp, or a naive ISO-8601 one taken as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Elapsed seconds with two decimals, e.g. `1.50s`.
///
/// End before start yields a negative value rather than an error.
/// Unparseable timestamps yield `n/a`.
pub fn latency_display(start: &str, end: &str) -> String {
    match (parse_timestamp(start), parse_timestamp(end)) {
        (Some(start), Some(end)) => {
            let millis = (end - start).num_milliseconds();
            format!("{:.2}s", millis as f64 / 1000.0)
        }
        _ => "n/a".to_string(),
    }
}

/// Cost is only known when both token counts are
pub fn estimate_cost(
    prompt_tokens: Option<u64>,
    completion_tokens: Option<u64>,
    unit_rate: f64,
) -> Option<f64> {
    let total = prompt_tokens?.saturating_add(completion_tokens?);
    Some(total as f64 * unit_rate)
}

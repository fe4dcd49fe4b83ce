//! Reminder scheduling over the medication list.
//!
//! Frequencies are free text ("Twice daily", "Every 8 hours") because that
//! is what the tracking forms collect. Anything unrecognized simply has no
//! schedule: the medication never comes due rather than erroring.

use chrono::{DateTime, Duration, Utc};

use crate::models::Medication;

/// Parse a free-text frequency into a dose interval.
pub fn dose_interval(frequency: &str) -> Option<Duration> {
    let normalized = frequency.trim().to_lowercase();
    match normalized.as_str() {
        "once daily" | "once a day" | "daily" => Some(Duration::hours(24)),
        "twice daily" | "twice a day" => Some(Duration::hours(12)),
        "three times daily" | "three times a day" => Some(Duration::hours(8)),
        "four times daily" | "four times a day" => Some(Duration::hours(6)),
        _ => every_n_hours(&normalized),
    }
}

/// "every N hours" / "every 1 hour".
fn every_n_hours(normalized: &str) -> Option<Duration> {
    let rest = normalized.strip_prefix("every ")?;
    let number = rest
        .strip_suffix(" hours")
        .or_else(|| rest.strip_suffix(" hour"))?;
    let n: i64 = number.trim().parse().ok()?;
    (n > 0).then(|| Duration::hours(n))
}

/// When the next dose is due after a dose taken at `last_taken`.
pub fn next_due(last_taken: DateTime<Utc>, frequency: &str) -> Option<DateTime<Utc>> {
    dose_interval(frequency).map(|interval| last_taken + interval)
}

/// Record a dose taken at `at` and roll the due time forward.
pub fn mark_taken(medication: &mut Medication, at: DateTime<Utc>) {
    medication.last_taken = Some(at);
    medication.next_due = next_due(at, &medication.frequency);
}

/// Active medications due at or before `now`, soonest first.
pub fn due_medications(medications: &[Medication], now: DateTime<Utc>) -> Vec<&Medication> {
    let mut due: Vec<&Medication> = medications
        .iter()
        .filter(|m| m.active)
        .filter(|m| m.next_due.is_some_and(|d| d <= now))
        .collect();
    due.sort_by_key(|m| m.next_due);
    due
}

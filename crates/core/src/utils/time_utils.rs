use chrono::{DateTime, NaiveDate, Utc};

/// Converts a UTC instant to the calendar day used for the "today" counters.
///
/// This is the single source of truth for same-day matching: plain UTC date
/// truncation, mirroring how the store's ISO-8601 timestamps are truncated
/// for display. No timezone conversion is applied.
pub fn queue_date_from_utc(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// The current queue date.
/// Equivalent to `queue_date_from_utc(Utc::now())`.
pub fn queue_date_today() -> NaiveDate {
    queue_date_from_utc(Utc::now())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_truncates_to_utc_date() {
        let instant = Utc.with_ymd_and_hms(2026, 8, 6, 23, 59, 59).unwrap();
        assert_eq!(
            queue_date_from_utc(instant),
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
        );
    }
}

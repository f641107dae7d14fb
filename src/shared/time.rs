use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Utility for parsing store timestamps into UTC instants.
pub struct TimeParser;

impl TimeParser {
    /// Parse a timestamp string into a UTC instant.
    /// Supports RFC3339/ISO-8601, naive ISO datetimes (treated as UTC),
    /// date-only (YYYY-MM-DD) and numeric epochs.
    pub fn parse_instant(input: &str) -> Option<DateTime<Utc>> {
        let s = input.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Utc.from_utc_datetime(&naive));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
        }
        if let Ok(num) = s.parse::<i128>() {
            return Self::from_epoch(num);
        }
        None
    }

    /// Instant from an integer epoch of unknown unit.
    pub fn from_epoch(n: i128) -> Option<DateTime<Utc>> {
        let millis = Self::normalize_integer_epoch_millis(n)?;
        DateTime::from_timestamp_millis(millis)
    }

    /// ISO-8601 with millisecond precision and a `Z` suffix, as the store expects.
    pub fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Heuristic normalization of integer magnitudes to milliseconds.
    /// - 0..=11 digits: seconds
    /// - 12..=14: milliseconds
    /// - 15..=16: microseconds
    /// - 17..=19: nanoseconds
    fn normalize_integer_epoch_millis(n: i128) -> Option<i64> {
        let digits = num_digits_u128(n.unsigned_abs());
        let millis = match digits {
            0..=11 => n * 1_000,
            12..=14 => n,
            15..=16 => n / 1_000,
            17..=19 => n / 1_000_000,
            _ => return None,
        };
        i64::try_from(millis).ok()
    }
}

fn num_digits_u128(mut x: u128) -> u32 {
    if x == 0 {
        return 1;
    }
    let mut c = 0;
    while x > 0 {
        x /= 10;
        c += 1;
    }
    c
}

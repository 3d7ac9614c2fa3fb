//! Fixed-precision timestamps for service-layer stamping.
//!
//! Services stamp `create_date`/`update_date` through a [`DateTimeFormatter`]
//! instead of the raw wall clock, so stored values carry a consistent
//! precision and survive a round trip through their string encoding at the
//! transport boundary.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Textual precision for formatted timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimePrecision {
    /// RFC 3339 with whole seconds (`2026-08-07T12:00:00Z`).
    #[default]
    Seconds,
    /// RFC 3339 with milliseconds (`2026-08-07T12:00:00.123Z`).
    Milliseconds,
}

/// Clock and string codec operating at a configured precision.
#[derive(Debug, Clone, Default)]
pub struct DateTimeFormatter {
    precision: TimePrecision,
}

impl DateTimeFormatter {
    pub fn new(precision: TimePrecision) -> Self {
        Self { precision }
    }

    /// Formatter at whole-second precision, the service default.
    pub fn seconds() -> Self {
        Self::new(TimePrecision::Seconds)
    }

    /// Current UTC time, truncated to the configured precision.
    pub fn now(&self) -> DateTime<Utc> {
        self.truncate(Utc::now())
    }

    /// Drop sub-precision fractions from `dt`.
    pub fn truncate(&self, dt: DateTime<Utc>) -> DateTime<Utc> {
        let nanos = i64::from(dt.timestamp_subsec_nanos());
        let keep = match self.precision {
            TimePrecision::Seconds => 0,
            TimePrecision::Milliseconds => (nanos / 1_000_000) * 1_000_000,
        };
        dt - Duration::nanoseconds(nanos - keep)
    }

    /// RFC 3339 encoding at the configured precision.
    pub fn format(&self, dt: DateTime<Utc>) -> String {
        let seconds_format = match self.precision {
            TimePrecision::Seconds => SecondsFormat::Secs,
            TimePrecision::Milliseconds => SecondsFormat::Millis,
        };
        dt.to_rfc3339_opts(seconds_format, true)
    }

    /// Parse an RFC 3339 string back into a UTC timestamp.
    pub fn parse(&self, value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(value).map(|dt| self.truncate(dt.with_timezone(&Utc)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike};

    use super::*;

    fn with_nanos(nanos: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 12, 30, 45)
            .single()
            .and_then(|dt| dt.with_nanosecond(nanos))
            .expect("valid test timestamp")
    }

    #[test]
    fn truncates_to_whole_seconds() {
        let fmt = DateTimeFormatter::seconds();
        let truncated = fmt.truncate(with_nanos(987_654_321));
        assert_eq!(truncated, with_nanos(0));
    }

    #[test]
    fn truncates_to_milliseconds() {
        let fmt = DateTimeFormatter::new(TimePrecision::Milliseconds);
        let truncated = fmt.truncate(with_nanos(987_654_321));
        assert_eq!(truncated, with_nanos(987_000_000));
    }

    #[test]
    fn format_parse_round_trip() {
        let fmt = DateTimeFormatter::seconds();
        let stamped = fmt.truncate(with_nanos(123_456_789));
        let encoded = fmt.format(stamped);
        assert_eq!(encoded, "2026-08-07T12:30:45Z");
        assert_eq!(fmt.parse(&encoded).expect("round trip"), stamped);
    }

    #[test]
    fn now_is_already_truncated() {
        let fmt = DateTimeFormatter::seconds();
        let now = fmt.now();
        assert_eq!(now.timestamp_subsec_nanos(), 0);
        assert_eq!(fmt.truncate(now), now);
    }

    #[test]
    fn parse_rejects_garbage() {
        let fmt = DateTimeFormatter::seconds();
        assert!(fmt.parse("not-a-date").is_err());
    }
}

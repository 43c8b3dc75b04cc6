//! ISO-8601 rendering of range bounds.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Timelike};

/// Values that can be sent as `timeMin`/`timeMax`.
pub trait ToIso8601 {
    fn to_iso8601(&self) -> String;
}

impl ToIso8601 for NaiveDate {
    /// `YYYY-MM-DD`
    fn to_iso8601(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl ToIso8601 for NaiveDateTime {
    /// `YYYY-MM-DDTHH:MM:SS`, plus six fractional digits when non-zero.
    fn to_iso8601(&self) -> String {
        if self.nanosecond() == 0 {
            self.format("%Y-%m-%dT%H:%M:%S").to_string()
        } else {
            self.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
        }
    }
}

impl<Tz: TimeZone> ToIso8601 for DateTime<Tz>
where
    Tz::Offset: Display,
{
    /// RFC 3339 with a numeric offset, e.g. `1969-07-20T22:56:00+00:00`.
    /// Fractional seconds use six digits when non-zero.
    fn to_iso8601(&self) -> String {
        let precision = if self.nanosecond() == 0 {
            SecondsFormat::Secs
        } else {
            SecondsFormat::Micros
        };
        self.to_rfc3339_opts(precision, false)
    }
}

impl<T: ToIso8601 + ?Sized> ToIso8601 for &T {
    fn to_iso8601(&self) -> String {
        (**self).to_iso8601()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime, Utc};

    #[test]
    fn test_utc_datetime() {
        let date = Utc.with_ymd_and_hms(1969, 7, 20, 22, 56, 0).unwrap();
        assert_eq!(date.to_iso8601(), "1969-07-20T22:56:00+00:00");
    }

    #[test]
    fn test_offset_datetime() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let date = offset.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap();
        assert_eq!(date.to_iso8601(), "2024-02-01T09:30:00+02:00");
    }

    #[test]
    fn test_naive_date() {
        let date = NaiveDate::from_ymd_opt(1969, 7, 20).unwrap();
        assert_eq!(date.to_iso8601(), "1969-07-20");

        fn render(value: impl ToIso8601) -> String {
            value.to_iso8601()
        }
        assert_eq!(render(&date), "1969-07-20");
    }

    #[test]
    fn test_naive_datetime() {
        let date = NaiveDate::from_ymd_opt(1969, 7, 20).unwrap();
        let whole = date.and_time(NaiveTime::from_hms_opt(22, 56, 0).unwrap());
        assert_eq!(whole.to_iso8601(), "1969-07-20T22:56:00");

        let fractional = date.and_time(NaiveTime::from_hms_milli_opt(22, 56, 0, 500).unwrap());
        assert_eq!(fractional.to_iso8601(), "1969-07-20T22:56:00.500000");
    }

    #[test]
    fn test_fractional_datetime_uses_micros() {
        let date = Utc.with_ymd_and_hms(1969, 7, 20, 22, 56, 0).unwrap()
            + chrono::Duration::milliseconds(500);
        assert_eq!(date.to_iso8601(), "1969-07-20T22:56:00.500000+00:00");

        let date = Utc.with_ymd_and_hms(1969, 7, 20, 22, 56, 0).unwrap()
            + chrono::Duration::microseconds(1);
        assert_eq!(date.to_iso8601(), "1969-07-20T22:56:00.000001+00:00");
    }
}

//! Start-time parsing and long-form rendering.
//!
//! Meetup pages publish `startDate` as ISO-8601, normally with an offset.
//! [`StartTime`] keeps whatever precision the page gave us: a zoned instant
//! when there is an offset, a naive local date-time when there is not. The
//! instant is rendered in its own offset; nothing is converted to the local
//! zone of the machine running the tool.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Long-form pattern, e.g. `Friday, March 15, 2024 at 06:00 PM`.
const LONG_FORM: &str = "%A, %B %d, %Y at %I:%M %p";

/// Naive date-time layouts accepted after RFC 3339 fails.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Zoned layouts for offsets RFC 3339 rejects (missing seconds).
const ZONED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// A parsed event start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartTime {
    /// A date-time carrying an explicit UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// A date-time (or bare date, at midnight) with no zone information.
    Naive(NaiveDateTime),
}

impl StartTime {
    /// Parses an ISO-8601 timestamp.
    ///
    /// Returns `None` for anything that is not a recognisable ISO-8601
    /// date or date-time; callers display the raw string in that case.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self::Zoned(dt));
        }

        // A trailing `Z` is just a zero offset.
        let zoned = match raw.strip_suffix('Z').or_else(|| raw.strip_suffix('z')) {
            Some(stripped) => format!("{stripped}+00:00"),
            None => raw.to_string(),
        };
        for fmt in ZONED_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(&zoned, fmt) {
                return Some(Self::Zoned(dt));
            }
        }

        for fmt in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(Self::Naive(dt));
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self::Naive)
    }

    /// Renders the long-form date line, e.g.
    /// `Friday, March 15, 2024 at 06:00 PM UTC`.
    pub fn long_form(&self) -> String {
        match self {
            Self::Zoned(dt) => {
                format!("{} {}", dt.format(LONG_FORM), zone_label(dt.offset()))
            }
            Self::Naive(dt) => dt.format(LONG_FORM).to_string(),
        }
    }
}

/// `UTC` for a zero offset, `UTC+HH:MM` / `UTC-HH:MM` otherwise.
fn zone_label(offset: &FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    if secs == 0 {
        return "UTC".to_string();
    }
    let sign = if secs < 0 { '-' } else { '+' };
    let abs = secs.unsigned_abs();
    format!("UTC{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

/// Formats a raw start string for display.
///
/// Parseable timestamps become the long form; everything else is returned
/// verbatim.
pub fn display_start(raw: &str) -> String {
    match StartTime::parse(raw) {
        Some(start) => start.long_form(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parse {
        use super::*;

        fn offset_seconds(start: &StartTime) -> Option<i32> {
            match start {
                StartTime::Zoned(dt) => Some(dt.offset().local_minus_utc()),
                StartTime::Naive(_) => None,
            }
        }

        #[test]
        fn rfc3339_utc() {
            let start = StartTime::parse("2024-03-15T18:00:00Z").unwrap();
            assert!(matches!(start, StartTime::Zoned(_)));
            assert_eq!(offset_seconds(&start), Some(0));
        }

        #[test]
        fn rfc3339_with_offset() {
            let start = StartTime::parse("2024-03-15T18:00:00-05:00").unwrap();
            assert_eq!(offset_seconds(&start), Some(-5 * 3600));
        }

        #[test]
        fn fractional_seconds() {
            assert!(StartTime::parse("2024-03-15T18:00:00.123Z").is_some());
        }

        #[test]
        fn zoned_without_seconds() {
            let start = StartTime::parse("2024-03-15T18:00-05:00").unwrap();
            assert_eq!(offset_seconds(&start), Some(-5 * 3600));
            let start = StartTime::parse("2024-03-15T18:00Z").unwrap();
            assert_eq!(offset_seconds(&start), Some(0));
        }

        #[test]
        fn naive_date_time() {
            let start = StartTime::parse("2024-03-15T18:00:00").unwrap();
            assert!(matches!(start, StartTime::Naive(_)));
            assert_eq!(offset_seconds(&start), None);
        }

        #[test]
        fn bare_date_is_midnight() {
            let start = StartTime::parse("2024-03-15").unwrap();
            assert_eq!(start.long_form(), "Friday, March 15, 2024 at 12:00 AM");
        }

        #[test]
        fn rejects_non_iso() {
            assert!(StartTime::parse("next Thursday").is_none());
            assert!(StartTime::parse("03/15/2024 6pm").is_none());
            assert!(StartTime::parse("").is_none());
            assert!(StartTime::parse("2024-13-45T99:00:00Z").is_none());
        }
    }

    mod render {
        use super::*;

        #[test]
        fn utc_long_form() {
            let start = StartTime::parse("2024-03-15T18:00:00Z").unwrap();
            assert_eq!(start.long_form(), "Friday, March 15, 2024 at 06:00 PM UTC");
        }

        #[test]
        fn offset_is_kept_not_converted() {
            let start = StartTime::parse("2024-03-15T18:30:00-05:00").unwrap();
            assert_eq!(
                start.long_form(),
                "Friday, March 15, 2024 at 06:30 PM UTC-05:00"
            );
        }

        #[test]
        fn positive_half_hour_offset() {
            let start = StartTime::parse("2024-01-02T09:05:00+05:30").unwrap();
            assert_eq!(
                start.long_form(),
                "Tuesday, January 02, 2024 at 09:05 AM UTC+05:30"
            );
        }

        #[test]
        fn naive_has_no_zone_label() {
            let start = StartTime::parse("2024-03-15T18:00:00").unwrap();
            assert_eq!(start.long_form(), "Friday, March 15, 2024 at 06:00 PM");
        }

        #[test]
        fn display_start_falls_back_to_raw() {
            assert_eq!(display_start("TBA"), "TBA");
            assert_eq!(
                display_start("2024-03-15T18:00:00Z"),
                "Friday, March 15, 2024 at 06:00 PM UTC"
            );
        }
    }
}

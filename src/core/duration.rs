//! Time-of-day arithmetic for time-log entries.
//!
//! Durations are whole minutes between a "from" and a "to" wall-clock time.
//! A "to" earlier than "from" means the activity crossed midnight inside the
//! same daily report (e.g. 23:30 → 00:15). Parsing never fails: the grid
//! calling into this module must not be interrupted by a half-typed value.

use chrono::{NaiveTime, Timelike};
use std::fmt;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Hour/minute/second triple as typed in a time-log row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Strict parse of `HH:MM` or `HH:MM:SS`, seconds 0-59.
    pub fn parse(text: &str) -> Option<Self> {
        let t = text.trim();
        NaiveTime::parse_from_str(t, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
            .ok()
            // chrono reads ":60" as a leap second
            .filter(|nt| nt.nanosecond() < 1_000_000_000)
            .map(Self::from)
    }

    /// Lenient parse: anything malformed or missing becomes `00:00:00`.
    pub fn parse_lenient(text: Option<&str>) -> Self {
        text.and_then(Self::parse).unwrap_or(Self::MIDNIGHT)
    }

    /// Minutes since midnight, rounding seconds >= 30 up to the next minute.
    pub fn rounded_minutes(&self) -> u32 {
        let base = self.hour * 60 + self.minute;
        if self.second >= 30 { base + 1 } else { base }
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Elapsed minutes between two times of day, rolling over midnight when
/// `to` is earlier than `from`.
pub fn elapsed_minutes(from: TimeOfDay, to: TimeOfDay) -> u32 {
    let from_m = from.rounded_minutes();
    let mut to_m = to.rounded_minutes();

    if to_m < from_m {
        to_m += MINUTES_PER_DAY;
    }

    to_m.saturating_sub(from_m)
}

/// Text-level entry point used by the edit paths.
pub fn compute_duration(from_text: &str, to_text: &str) -> u32 {
    elapsed_minutes(
        TimeOfDay::parse_lenient(Some(from_text)),
        TimeOfDay::parse_lenient(Some(to_text)),
    )
}

/// Duration to store after a from/to edit.
///
/// Keeps `previous` when either side is missing or does not parse, so a
/// transient bad edit never wipes a valid stored duration.
pub fn recompute_duration(previous: u32, from_text: Option<&str>, to_text: Option<&str>) -> u32 {
    match (
        from_text.and_then(TimeOfDay::parse),
        to_text.and_then(TimeOfDay::parse),
    ) {
        (Some(from), Some(to)) => elapsed_minutes(from, to),
        _ => previous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_table() {
        let cases = [
            ("08:00:00", "10:30:00", 150),
            ("23:30:00", "00:15:00", 45),
            ("10:00:00", "10:00:00", 0),
            // start rounds up to 10:01, end stays 10:01
            ("10:00:45", "10:01:10", 0),
            ("10:00:29", "10:01:30", 2),
            ("10:00:30", "10:01:29", 0),
            ("06:00", "18:00", 720),
            ("18:00", "06:00", 720),
            ("00:00:00", "23:59:59", 1440),
            ("23:59:30", "00:00:00", 0),
            ("00:01", "00:00", 1439),
        ];

        for (from, to, expected) in cases {
            assert_eq!(
                compute_duration(from, to),
                expected,
                "compute_duration({from}, {to})"
            );
        }
    }

    #[test]
    fn test_malformed_input_is_midnight() {
        assert_eq!(
            compute_duration("bad", "10:00:00"),
            compute_duration("00:00:00", "10:00:00")
        );
        assert_eq!(compute_duration("", "01:30"), 90);
        assert_eq!(compute_duration("25:00:00", "00:10:00"), 10);
        assert_eq!(compute_duration("12:61", "12:00"), 720);
        assert_eq!(
            compute_duration("10:00:60", "11:00:00"),
            compute_duration("00:00:00", "11:00:00")
        );
        assert_eq!(TimeOfDay::parse_lenient(None), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn test_duration_is_bounded() {
        let samples = [
            "00:00:00", "00:00:30", "06:15:10", "12:00:00", "23:59:29", "23:59:59",
        ];
        for from in samples {
            for to in samples {
                let d = compute_duration(from, to);
                assert!(d < MINUTES_PER_DAY + 60, "{from} -> {to} gave {d}");
            }
        }
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!(
            TimeOfDay::parse(" 07:05 "),
            Some(TimeOfDay {
                hour: 7,
                minute: 5,
                second: 0
            })
        );
        assert_eq!(
            TimeOfDay::parse("7:05:09").map(|t| t.to_string()),
            Some("07:05:09".into())
        );
        assert!(TimeOfDay::parse("24:00").is_none());
        assert!(TimeOfDay::parse("10:00:60").is_none());
        assert!(TimeOfDay::parse("ab:cd").is_none());
    }

    #[test]
    fn test_recompute_keeps_previous_on_bad_edit() {
        assert_eq!(recompute_duration(150, Some("08:00"), Some("1x:30")), 150);
        assert_eq!(recompute_duration(150, None, Some("10:30")), 150);
        assert_eq!(recompute_duration(77, Some("10:00:60"), Some("11:00")), 77);
        assert_eq!(recompute_duration(150, Some("08:00"), Some("09:00")), 60);
        assert_eq!(recompute_duration(0, Some("23:00"), Some("01:00")), 120);
    }
}

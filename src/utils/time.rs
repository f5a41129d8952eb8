//! Time display helpers for time-log rows.

use crate::core::duration::TimeOfDay;

/// Render a stored `HH:MM:SS` according to the configured `time_format`.
/// Unparsable stored text is shown as typed; a missing time as `--:--`.
pub fn display_time(stored: Option<&str>, time_format: &str) -> String {
    match stored {
        None => "--:--".to_string(),
        Some(s) => match TimeOfDay::parse(s) {
            Some(t) if time_format == "long" => t.to_string(),
            Some(t) => format!("{:02}:{:02}", t.hour, t.minute),
            None => s.to_string(),
        },
    }
}

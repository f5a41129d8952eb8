use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `YYYY-MM-DD`, or the keywords `today` / `yesterday`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    match s.trim().to_lowercase().as_str() {
        "today" => Some(today()),
        "yesterday" => today().checked_sub_days(Days::new(1)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d").ok(),
    }
}

pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

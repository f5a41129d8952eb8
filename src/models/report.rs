use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    pub id: i64,
    pub well: String,           // ⇔ daily_reports.well
    pub report_date: NaiveDate, // ⇔ daily_reports.report_date (TEXT "YYYY-MM-DD")
    pub created_at: String,     // ⇔ daily_reports.created_at (TEXT, ISO8601)
}

impl DailyReport {
    pub fn date_str(&self) -> String {
        self.report_date.format("%Y-%m-%d").to_string()
    }

    /// "WELL @ YYYY-MM-DD", used as audit-log target.
    pub fn target(&self) -> String {
        format!("{} @ {}", self.well, self.date_str())
    }
}

use crate::core::cascade::{self, CodeLookup};
use crate::core::duration::{TimeOfDay, recompute_duration};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeLogEntry {
    pub id: i64,
    pub report_id: i64,               // ⇔ time_logs.report_id
    pub line: i64,                    // ⇔ time_logs.line (1-based, contiguous)
    pub from_time: Option<String>,    // ⇔ time_logs.from_time (TEXT "HH:MM:SS")
    pub to_time: Option<String>,      // ⇔ time_logs.to_time (TEXT "HH:MM:SS")
    pub duration_minutes: u32,        // ⇔ time_logs.duration_minutes
    pub main_code_ref: Option<i64>,   // ⇔ time_logs.main_code_id
    pub sub_code_ref: Option<i64>,    // ⇔ time_logs.sub_code_id
    pub is_npt: bool,                 // ⇔ time_logs.is_npt
    pub description: String,
}

impl TimeLogEntry {
    /// Fresh row: zero duration, no times, no codes.
    pub fn new(report_id: i64, line: i64) -> Self {
        Self {
            id: 0,
            report_id,
            line,
            from_time: None,
            to_time: None,
            duration_minutes: 0,
            main_code_ref: None,
            sub_code_ref: None,
            is_npt: false,
            description: String::new(),
        }
    }

    pub fn set_from_time(&mut self, text: &str) {
        self.from_time = Some(normalize_time_text(text));
        self.refresh_duration();
    }

    pub fn set_to_time(&mut self, text: &str) {
        self.to_time = Some(normalize_time_text(text));
        self.refresh_duration();
    }

    pub fn set_main_code<L: CodeLookup + ?Sized>(&mut self, main_code_id: Option<i64>, lookup: &L) {
        cascade::apply_main_code_change(self, main_code_id, lookup);
    }

    pub fn set_sub_code(&mut self, sub_code_id: Option<i64>) {
        cascade::apply_sub_code_change(self, sub_code_id);
    }

    pub fn set_npt(&mut self, is_npt: bool) {
        self.is_npt = is_npt;
    }

    pub fn set_description(&mut self, text: &str) {
        self.description = text.trim().to_string();
    }

    fn refresh_duration(&mut self) {
        self.duration_minutes = recompute_duration(
            self.duration_minutes,
            self.from_time.as_deref(),
            self.to_time.as_deref(),
        );
    }
}

/// `HH:MM` / `HH:MM:SS` → `HH:MM:SS`; unparsable text is kept as typed.
fn normalize_time_text(text: &str) -> String {
    TimeOfDay::parse(text)
        .map(|t| t.to_string())
        .unwrap_or_else(|| text.trim().to_string())
}

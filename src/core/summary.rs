use crate::models::time_log::TimeLogEntry;
use serde::Serialize;

/// Totals of one daily report.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub lines: usize,
    pub total_minutes: i64,
    pub npt_minutes: i64,
    pub productive_minutes: i64,
}

pub fn summarize(entries: &[TimeLogEntry]) -> ReportSummary {
    let total: i64 = entries.iter().map(|e| e.duration_minutes as i64).sum();
    let npt: i64 = entries
        .iter()
        .filter(|e| e.is_npt)
        .map(|e| e.duration_minutes as i64)
        .sum();

    ReportSummary {
        lines: entries.len(),
        total_minutes: total,
        npt_minutes: npt,
        productive_minutes: total - npt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_splits_npt() {
        let mut a = TimeLogEntry::new(1, 1);
        a.set_from_time("06:00");
        a.set_to_time("12:00");
        let mut b = TimeLogEntry::new(1, 2);
        b.set_from_time("12:00");
        b.set_to_time("13:30");
        b.set_npt(true);

        let s = summarize(&[a, b]);
        assert_eq!(s.lines, 2);
        assert_eq!(s.total_minutes, 450);
        assert_eq!(s.npt_minutes, 90);
        assert_eq!(s.productive_minutes, 360);
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(summarize(&[]), ReportSummary::default());
    }
}

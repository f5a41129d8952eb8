use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{load_time_logs, replace_report_entries, require_report};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one line (remaining lines are renumbered) or every line of the
    /// report. Returns the number of deleted rows.
    pub fn apply(
        pool: &mut DbPool,
        well: &str,
        date: NaiveDate,
        line: Option<usize>,
    ) -> AppResult<usize> {
        let report = require_report(&pool.conn, well, &date)?;
        let mut entries = load_time_logs(&pool.conn, report.id)?;

        if let Some(l) = line {
            let idx = entries
                .iter()
                .position(|e| e.line == l as i64)
                .ok_or(AppError::InvalidLine(l))?;

            entries.remove(idx);
            replace_report_entries(pool, report.id, &entries)?;

            ttlog_soft(
                &pool.conn,
                "del",
                &report.target(),
                &format!("Line {} deleted", l),
            );
            info(format!("Deleted line {} of {}", l, report.target()));
            return Ok(1);
        }

        let deleted = entries.len();
        replace_report_entries(pool, report.id, &[])?;

        ttlog_soft(
            &pool.conn,
            "del",
            &report.target(),
            &format!("All {} lines deleted", deleted),
        );
        info(format!("Deleted all lines of {}", report.target()));
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;
    use crate::db::queries::{get_or_create_report, insert_time_log};
    use crate::models::time_log::TimeLogEntry;

    #[test]
    fn test_delete_addresses_stored_line_number() {
        let mut pool = DbPool::new(":memory:").unwrap();
        run_pending_migrations(&pool.conn).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 5, 7).unwrap();
        let report = get_or_create_report(&pool.conn, "GAP-2", &date).unwrap();

        for (line, desc) in [(1, "keep"), (3, "drop")] {
            let mut e = TimeLogEntry::new(report.id, line);
            e.set_description(desc);
            insert_time_log(&pool.conn, &e).unwrap();
        }

        assert!(matches!(
            DeleteLogic::apply(&mut pool, "GAP-2", date, Some(2)),
            Err(AppError::InvalidLine(2))
        ));

        assert_eq!(DeleteLogic::apply(&mut pool, "GAP-2", date, Some(3)).unwrap(), 1);

        let rows = load_time_logs(&pool.conn, report.id).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "keep");
        assert_eq!(rows[0].line, 1);
    }
}

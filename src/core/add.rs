use crate::core::edit::{EntryEdit, apply_edit};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{get_or_create_report, insert_time_log, load_taxonomy, load_time_logs};
use crate::errors::AppResult;
use crate::models::time_log::TimeLogEntry;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Append a new row at the end of the daily report of `(well, date)`,
    /// creating the report when missing. The row starts blank and then
    /// receives the given fields through the regular edit path.
    pub fn apply(
        pool: &mut DbPool,
        well: &str,
        date: NaiveDate,
        edit: &EntryEdit,
    ) -> AppResult<TimeLogEntry> {
        let taxonomy = load_taxonomy(&pool.conn)?;

        // fields are validated before the report is created
        let mut entry = TimeLogEntry::new(0, 0);
        apply_edit(&mut entry, edit, &taxonomy)?;

        let report = get_or_create_report(&pool.conn, well, &date)?;
        let line = load_time_logs(&pool.conn, report.id)?.len() as i64 + 1;
        entry.report_id = report.id;
        entry.line = line;

        entry.id = insert_time_log(&pool.conn, &entry)?;

        let message = if edit.is_empty() {
            format!("Line {} added (blank)", line)
        } else {
            format!("Line {} added ({})", line, edit.describe())
        };
        ttlog_soft(&pool.conn, "add", &report.target(), &message);

        success(format!(
            "Added line {} to {} ({} min).",
            line,
            report.target(),
            entry.duration_minutes
        ));

        Ok(entry)
    }
}

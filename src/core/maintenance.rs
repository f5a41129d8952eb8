use crate::db::log::ttlog_soft;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Outcome of `PRAGMA integrity_check` plus the report-level checks.
#[derive(Debug, Default)]
pub struct IntegrityReport {
    pub sqlite: String,
    /// Lines whose sub code does not belong to their main code.
    pub orphan_sub_codes: i64,
    /// Reports whose line numbers are not 1..=n.
    pub gapped_reports: i64,
}

impl IntegrityReport {
    pub fn is_ok(&self) -> bool {
        self.sqlite == "ok" && self.orphan_sub_codes == 0 && self.gapped_reports == 0
    }
}

pub struct MaintenanceLogic;

impl MaintenanceLogic {
    pub fn migrate(pool: &mut DbPool) -> AppResult<usize> {
        let applied = run_pending_migrations(&pool.conn)?;
        Ok(applied)
    }

    pub fn check(pool: &mut DbPool) -> AppResult<IntegrityReport> {
        let sqlite: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        let orphan_sub_codes: i64 = pool.conn.query_row(
            "SELECT COUNT(*) FROM time_logs t
             JOIN sub_codes s ON s.id = t.sub_code_id
             WHERE t.main_code_id IS NULL OR s.main_code_id <> t.main_code_id",
            [],
            |row| row.get(0),
        )?;

        let gapped_reports: i64 = pool.conn.query_row(
            "SELECT COUNT(*) FROM (
                SELECT report_id FROM time_logs
                GROUP BY report_id
                HAVING MIN(line) <> 1 OR MAX(line) <> COUNT(*) OR COUNT(DISTINCT line) <> COUNT(*)
             )",
            [],
            |row| row.get(0),
        )?;

        Ok(IntegrityReport {
            sqlite,
            orphan_sub_codes,
            gapped_reports,
        })
    }

    pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
        pool.conn.execute_batch("VACUUM;")?;
        ttlog_soft(&pool.conn, "vacuum", "", "Database optimized");
        Ok(())
    }
}

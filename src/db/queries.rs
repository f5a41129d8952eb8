use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::codes::{MainCode, SubCode, Taxonomy};
use crate::models::report::DailyReport;
use crate::models::time_log::TimeLogEntry;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Code taxonomy
// ---------------------------

pub fn load_taxonomy(conn: &Connection) -> AppResult<Taxonomy> {
    let mut stmt = conn.prepare("SELECT id, code, name FROM main_codes ORDER BY code ASC")?;
    let main_codes = stmt
        .query_map([], |row| {
            Ok(MainCode {
                id: row.get("id")?,
                code: row.get("code")?,
                name: row.get("name")?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;

    let mut stmt = conn.prepare(
        "SELECT id, main_code_id, code, name FROM sub_codes ORDER BY main_code_id ASC, code ASC",
    )?;
    let sub_codes = stmt
        .query_map([], |row| {
            Ok(SubCode {
                id: row.get("id")?,
                main_code_id: row.get("main_code_id")?,
                code: row.get("code")?,
                name: row.get("name")?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;

    Ok(Taxonomy {
        main_codes,
        sub_codes,
    })
}

pub fn insert_main_code(conn: &Connection, code: &str, name: &str) -> AppResult<i64> {
    let code = code.trim();
    let exists = conn
        .query_row(
            "SELECT 1 FROM main_codes WHERE code = ?1",
            [code],
            |_| Ok(()),
        )
        .optional()?
        .is_some();

    if exists {
        return Err(AppError::DuplicateCode(code.to_string()));
    }

    conn.execute(
        "INSERT INTO main_codes (code, name) VALUES (?1, ?2)",
        params![code, name.trim()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_sub_code(
    conn: &Connection,
    main_code_id: i64,
    code: &str,
    name: &str,
) -> AppResult<i64> {
    let code = code.trim();
    let exists = conn
        .query_row(
            "SELECT 1 FROM sub_codes WHERE main_code_id = ?1 AND code = ?2",
            params![main_code_id, code],
            |_| Ok(()),
        )
        .optional()?
        .is_some();

    if exists {
        return Err(AppError::DuplicateCode(code.to_string()));
    }

    conn.execute(
        "INSERT INTO sub_codes (main_code_id, code, name) VALUES (?1, ?2, ?3)",
        params![main_code_id, code, name.trim()],
    )?;
    Ok(conn.last_insert_rowid())
}

// ---------------------------
// Daily reports
// ---------------------------

fn map_report(row: &Row) -> Result<DailyReport> {
    let date_str: String = row.get("report_date")?;
    let report_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(DailyReport {
        id: row.get("id")?,
        well: row.get("well")?,
        report_date,
        created_at: row.get("created_at")?,
    })
}

pub fn find_report(
    conn: &Connection,
    well: &str,
    date: &NaiveDate,
) -> AppResult<Option<DailyReport>> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let report = conn
        .query_row(
            "SELECT id, well, report_date, created_at FROM daily_reports
             WHERE well = ?1 AND report_date = ?2",
            params![well.trim(), date_str],
            map_report,
        )
        .optional()?;
    Ok(report)
}

/// Report for `(well, date)`; an error if none exists.
pub fn require_report(conn: &Connection, well: &str, date: &NaiveDate) -> AppResult<DailyReport> {
    find_report(conn, well, date)?.ok_or_else(|| AppError::NoReport {
        well: well.trim().to_string(),
        date: date.format("%Y-%m-%d").to_string(),
    })
}

pub fn get_or_create_report(
    conn: &Connection,
    well: &str,
    date: &NaiveDate,
) -> AppResult<DailyReport> {
    if let Some(r) = find_report(conn, well, date)? {
        return Ok(r);
    }

    conn.execute(
        "INSERT INTO daily_reports (well, report_date, created_at) VALUES (?1, ?2, ?3)",
        params![
            well.trim(),
            date.format("%Y-%m-%d").to_string(),
            Local::now().to_rfc3339()
        ],
    )?;

    require_report(conn, well, date)
}

// ---------------------------
// Time logs
// ---------------------------

pub fn map_time_log(row: &Row) -> Result<TimeLogEntry> {
    Ok(TimeLogEntry {
        id: row.get("id")?,
        report_id: row.get("report_id")?,
        line: row.get("line")?,
        from_time: row.get("from_time")?,
        to_time: row.get("to_time")?,
        duration_minutes: row.get("duration_minutes")?,
        main_code_ref: row.get("main_code_id")?,
        sub_code_ref: row.get("sub_code_id")?,
        is_npt: row.get::<_, i32>("is_npt")? == 1,
        description: row.get("description")?,
    })
}

pub fn load_time_logs(conn: &Connection, report_id: i64) -> AppResult<Vec<TimeLogEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, report_id, line, from_time, to_time, duration_minutes,
                main_code_id, sub_code_id, is_npt, description
         FROM time_logs
         WHERE report_id = ?1
         ORDER BY line ASC, id ASC",
    )?;

    let rows = stmt.query_map([report_id], map_time_log)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_time_log(conn: &Connection, e: &TimeLogEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO time_logs (report_id, line, from_time, to_time, duration_minutes,
                                main_code_id, sub_code_id, is_npt, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            e.report_id,
            e.line,
            e.from_time,
            e.to_time,
            e.duration_minutes,
            e.main_code_ref,
            e.sub_code_ref,
            if e.is_npt { 1 } else { 0 },
            e.description,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_time_log(conn: &Connection, e: &TimeLogEntry) -> AppResult<()> {
    conn.execute(
        "UPDATE time_logs
         SET from_time = ?1, to_time = ?2, duration_minutes = ?3,
             main_code_id = ?4, sub_code_id = ?5, is_npt = ?6, description = ?7
         WHERE id = ?8",
        params![
            e.from_time,
            e.to_time,
            e.duration_minutes,
            e.main_code_ref,
            e.sub_code_ref,
            if e.is_npt { 1 } else { 0 },
            e.description,
            e.id,
        ],
    )?;
    Ok(())
}

/// Save a report's rows the way the grid editors do: delete every row of
/// the report and reinsert `entries` with contiguous line numbers.
/// Runs in one transaction.
pub fn replace_report_entries(
    pool: &mut DbPool,
    report_id: i64,
    entries: &[TimeLogEntry],
) -> AppResult<()> {
    pool.with_conn(|conn| {
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM time_logs WHERE report_id = ?1", [report_id])?;

        for (idx, e) in entries.iter().enumerate() {
            tx.execute(
                "INSERT INTO time_logs (report_id, line, from_time, to_time, duration_minutes,
                                        main_code_id, sub_code_id, is_npt, description)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    report_id,
                    (idx + 1) as i64,
                    e.from_time,
                    e.to_time,
                    e.duration_minutes,
                    e.main_code_ref,
                    e.sub_code_ref,
                    if e.is_npt { 1 } else { 0 },
                    e.description,
                ],
            )?;
        }

        tx.commit()
    })?;

    Ok(())
}

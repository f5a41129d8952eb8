use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// One schema step. Applied steps are recorded in the `log` table with
/// `operation = 'migration_applied'` and `target = version`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_codes",
        description: "Created main_codes and sub_codes tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS main_codes (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            code  TEXT NOT NULL UNIQUE COLLATE NOCASE,
            name  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sub_codes (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            main_code_id  INTEGER NOT NULL REFERENCES main_codes(id) ON DELETE CASCADE,
            code          TEXT NOT NULL COLLATE NOCASE,
            name          TEXT NOT NULL,
            UNIQUE(main_code_id, code)
        );
        "#,
    },
    Migration {
        version: "20250301_0002_create_reports",
        description: "Created daily_reports table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS daily_reports (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            well         TEXT NOT NULL,
            report_date  TEXT NOT NULL,
            created_at   TEXT NOT NULL,
            UNIQUE(well, report_date)
        );
        "#,
    },
    Migration {
        version: "20250301_0003_create_time_logs",
        description: "Created time_logs table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS time_logs (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            report_id         INTEGER NOT NULL REFERENCES daily_reports(id) ON DELETE CASCADE,
            line              INTEGER NOT NULL,
            from_time         TEXT,
            to_time           TEXT,
            duration_minutes  INTEGER NOT NULL DEFAULT 0 CHECK(duration_minutes >= 0),
            main_code_id      INTEGER REFERENCES main_codes(id) ON DELETE SET NULL,
            sub_code_id       INTEGER REFERENCES sub_codes(id) ON DELETE SET NULL,
            is_npt            INTEGER NOT NULL DEFAULT 0,
            description       TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_time_logs_report_line ON time_logs(report_id, line);
        "#,
    },
];

/// Ensure that the `log` table exists: it also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db() and `db --migrate`.
/// Returns how many migrations were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        apply(conn, m)?;
        success(format!("Migration applied: {} → {}", m.version, m.description));
        applied += 1;
    }

    Ok(applied)
}

use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{load_taxonomy, load_time_logs, require_report, update_time_log};
use crate::errors::{AppError, AppResult};
use crate::models::codes::Taxonomy;
use crate::models::time_log::TimeLogEntry;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// Field changes requested on one time-log row.
/// Applied in grid order: from, to, main code, sub code, NPT, description.
#[derive(Debug, Clone, Default)]
pub struct EntryEdit {
    pub from: Option<String>,
    pub to: Option<String>,
    /// Main code by short code; `none` clears it.
    pub main: Option<String>,
    /// Sub code by short code, among the sub codes of the current main code.
    pub sub: Option<String>,
    pub clear_sub: bool,
    pub npt: Option<bool>,
    pub description: Option<String>,
}

impl EntryEdit {
    pub fn is_empty(&self) -> bool {
        self.from.is_none()
            && self.to.is_none()
            && self.main.is_none()
            && self.sub.is_none()
            && !self.clear_sub
            && self.npt.is_none()
            && self.description.is_none()
    }

    /// Short human-readable list of the touched fields, for the audit log.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(v) = &self.from {
            parts.push(format!("from={}", v));
        }
        if let Some(v) = &self.to {
            parts.push(format!("to={}", v));
        }
        if let Some(v) = &self.main {
            parts.push(format!("main={}", v));
        }
        if let Some(v) = &self.sub {
            parts.push(format!("sub={}", v));
        }
        if self.clear_sub {
            parts.push("sub=none".to_string());
        }
        if let Some(v) = self.npt {
            parts.push(format!("npt={}", v));
        }
        if self.description.is_some() {
            parts.push("description".to_string());
        }
        parts.join(", ")
    }
}

/// Apply `edit` to `entry` field by field.
///
/// A main-code change runs the cascade, so a sub code of the previous main
/// code is dropped. A sub code is only accepted among the candidates of the
/// main code the entry has at that point.
pub fn apply_edit(
    entry: &mut TimeLogEntry,
    edit: &EntryEdit,
    taxonomy: &Taxonomy,
) -> AppResult<()> {
    if let Some(from) = &edit.from {
        entry.set_from_time(from);
    }

    if let Some(to) = &edit.to {
        entry.set_to_time(to);
    }

    if let Some(main) = &edit.main {
        let main_id = if main.trim().eq_ignore_ascii_case("none") {
            None
        } else {
            let m = taxonomy
                .main_by_code(main)
                .ok_or_else(|| AppError::UnknownMainCode(main.clone()))?;
            Some(m.id)
        };
        entry.set_main_code(main_id, taxonomy);
    }

    if let Some(sub) = &edit.sub {
        let main_id = entry
            .main_code_ref
            .ok_or_else(|| AppError::SubCodeWithoutMain(sub.clone()))?;

        let candidate = taxonomy.sub_by_code(main_id, sub).ok_or_else(|| AppError::UnknownSubCode {
            main: taxonomy
                .main_by_id(main_id)
                .map(|m| m.code.clone())
                .unwrap_or_else(|| main_id.to_string()),
            sub: sub.clone(),
        })?;

        entry.set_sub_code(Some(candidate.id));
    }

    if edit.clear_sub {
        entry.set_sub_code(None);
    }

    if let Some(npt) = edit.npt {
        entry.set_npt(npt);
    }

    if let Some(desc) = &edit.description {
        entry.set_description(desc);
    }

    Ok(())
}

pub struct EditLogic;

impl EditLogic {
    pub fn apply(
        pool: &mut DbPool,
        well: &str,
        date: NaiveDate,
        line: usize,
        edit: &EntryEdit,
    ) -> AppResult<TimeLogEntry> {
        if edit.is_empty() {
            return Err(AppError::Other(
                "Nothing to do: specify at least one field to edit.".into(),
            ));
        }

        let report = require_report(&pool.conn, well, &date)?;
        let taxonomy = load_taxonomy(&pool.conn)?;
        let entries = load_time_logs(&pool.conn, report.id)?;

        let mut entry = entries
            .into_iter()
            .find(|e| e.line == line as i64)
            .ok_or(AppError::InvalidLine(line))?;

        apply_edit(&mut entry, edit, &taxonomy)?;
        update_time_log(&pool.conn, &entry)?;

        ttlog_soft(
            &pool.conn,
            "edit",
            &report.target(),
            &format!("Line {} updated ({})", line, edit.describe()),
        );

        success(format!(
            "Line {} of {} updated ({} min).",
            line,
            report.target(),
            entry.duration_minutes
        ));

        Ok(entry)
    }
}

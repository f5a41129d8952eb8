use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{ReportSummary, summarize};
use crate::db::pool::DbPool;
use crate::db::queries::{load_taxonomy, load_time_logs, require_report};
use crate::errors::AppResult;
use crate::models::codes::Taxonomy;
use crate::models::report::DailyReport;
use crate::models::time_log::TimeLogEntry;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, colorize_optional, npt_color};
use crate::utils::date;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::display_time;
use serde::Serialize;

#[derive(Serialize)]
struct JsonLine<'a> {
    #[serde(flatten)]
    entry: &'a TimeLogEntry,
    code: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    well: &'a str,
    date: String,
    lines: Vec<JsonLine<'a>>,
    summary: &'a ReportSummary,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        well,
        date: date_str,
        json,
    } = cmd
    {
        let d = date::require_date(date_str)?;
        let well = cfg.resolve_well(well)?;

        let pool = DbPool::new(&cfg.database)?;
        let report = require_report(&pool.conn, &well, &d)?;
        let taxonomy = load_taxonomy(&pool.conn)?;
        let entries = load_time_logs(&pool.conn, report.id)?;
        let summary = summarize(&entries);

        if *json {
            print_json(&report, &entries, &taxonomy, &summary)?;
        } else {
            print_table(&report, &entries, &taxonomy, &summary, cfg);
        }
    }

    Ok(())
}

fn print_json(
    report: &DailyReport,
    entries: &[TimeLogEntry],
    taxonomy: &Taxonomy,
    summary: &ReportSummary,
) -> AppResult<()> {
    let out = JsonReport {
        well: &report.well,
        date: report.date_str(),
        lines: entries
            .iter()
            .map(|e| JsonLine {
                entry: e,
                code: taxonomy.label(e.main_code_ref, e.sub_code_ref),
            })
            .collect(),
        summary,
    };

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn print_table(
    report: &DailyReport,
    entries: &[TimeLogEntry],
    taxonomy: &Taxonomy,
    summary: &ReportSummary,
    cfg: &Config,
) {
    header(report.target());

    if entries.is_empty() {
        info("No time-log lines in this report.");
        return;
    }

    let time_w = if cfg.time_format == "long" { 8 } else { 5 };
    let mut table = Table::new(vec![
        Column::right("#", 3),
        Column::left("From", time_w),
        Column::left("To", time_w),
        Column::right("Min", 5),
        Column::left("Code", 12),
        Column::left("NPT", 3),
        Column::left("Description", 30),
    ]);

    let npt = npt_color(&cfg.npt_color);

    for e in entries {
        let mut row = vec![
            e.line.to_string(),
            colorize_optional(&display_time(e.from_time.as_deref(), &cfg.time_format)),
            colorize_optional(&display_time(e.to_time.as_deref(), &cfg.time_format)),
            e.duration_minutes.to_string(),
            colorize_optional(&taxonomy.label(e.main_code_ref, e.sub_code_ref)),
            if e.is_npt { "yes".into() } else { String::new() },
            e.description.clone(),
        ];

        if e.is_npt {
            row = row
                .into_iter()
                .map(|c| format!("{npt}{}{RESET}", crate::utils::colors::strip_ansi(&c)))
                .collect();
        }

        table.add_row(row);
    }

    print!("{}", table.render());
    println!();
    println!(
        "Total: {} | Productive: {} | NPT: {}",
        mins2readable(summary.total_minutes),
        mins2readable(summary.productive_minutes),
        mins2readable(summary.npt_minutes)
    );
}

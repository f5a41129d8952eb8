use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::maintenance::MaintenanceLogic;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*migrate || *check || *vacuum || *show_info) {
        info("Nothing to do: use --migrate, --check, --vacuum or --info.");
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        info("Running migrations…");
        let applied = MaintenanceLogic::migrate(&mut pool)?;
        success(format!("Migration completed ({} applied).", applied));
    }

    if *show_info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        info("Running integrity check…");
        let report = MaintenanceLogic::check(&mut pool)?;

        if report.is_ok() {
            success("Integrity check passed.");
        } else {
            if report.sqlite != "ok" {
                error(format!("SQLite integrity check failed: {}", report.sqlite));
            }
            if report.orphan_sub_codes > 0 {
                error(format!(
                    "{} line(s) carry a sub code of another main code.",
                    report.orphan_sub_codes
                ));
            }
            if report.gapped_reports > 0 {
                error(format!(
                    "{} report(s) have non-contiguous line numbers.",
                    report.gapped_reports
                ));
            }
        }
    }

    if *vacuum {
        info("Running VACUUM…");
        MaintenanceLogic::vacuum(&mut pool)?;
        success("Vacuum completed.");
    }

    Ok(())
}

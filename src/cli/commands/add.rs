use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::edit::EntryEdit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;

/// Append a time-log line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        well,
        date: date_str,
        fields,
        npt,
    } = cmd
    {
        let d = date::require_date(date_str)?;
        let well = cfg.resolve_well(well)?;

        let mut edit = EntryEdit::from(fields);
        if *npt {
            edit.npt = Some(true);
        }

        let mut pool = DbPool::new(&cfg.database)?;
        AddLogic::apply(&mut pool, &well, d, &edit)?;
    }

    Ok(())
}

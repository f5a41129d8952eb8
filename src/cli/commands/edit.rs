use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EntryEdit};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;

/// Edit fields of one time-log line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        well,
        date: date_str,
        line,
        fields,
        clear_sub,
        npt,
        no_npt,
    } = cmd
    {
        let d = date::require_date(date_str)?;
        let well = cfg.resolve_well(well)?;

        let mut edit = EntryEdit::from(fields);
        edit.clear_sub = *clear_sub;
        edit.npt = match (*npt, *no_npt) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        EditLogic::apply(&mut pool, &well, d, *line, &edit)?;
    }

    Ok(())
}

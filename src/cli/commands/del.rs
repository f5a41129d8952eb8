use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        well,
        date: date_str,
        line,
        yes,
    } = cmd
    {
        let d = date::require_date(date_str)?;
        let well = cfg.resolve_well(well)?;

        let prompt = match line {
            Some(l) => format!(
                "Delete line #{} of {} @ {}? This action is irreversible.",
                l, well, d
            ),
            None => format!("Delete ALL lines of {} @ {}? This action is irreversible.", well, d),
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let deleted = DeleteLogic::apply(&mut pool, &well, d, *line)?;

        success(format!("{} line(s) deleted.", deleted));
    }

    Ok(())
}

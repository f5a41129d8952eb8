use crate::cli::parser::{CodeAction, Commands};
use crate::config::Config;
use crate::core::codes::CodeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Code { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            CodeAction::AddMain { code, name } => {
                CodeLogic::add_main(&mut pool, code, name)?;
            }
            CodeAction::AddSub { main, code, name } => {
                CodeLogic::add_sub(&mut pool, main, code, name)?;
            }
            CodeAction::List => {
                let taxonomy = CodeLogic::list(&mut pool)?;

                if taxonomy.main_codes.is_empty() {
                    info("No activity codes defined yet.");
                    return Ok(());
                }

                header("Activity codes");
                for m in &taxonomy.main_codes {
                    println!("{:<8} {}", m.code, m.name);

                    let mut subs = taxonomy.sub_candidates(m.id).peekable();
                    if subs.peek().is_none() {
                        println!("    {GREY}(no sub codes){RESET}");
                    }
                    for s in subs {
                        println!("    {:<8} {}", s.code, s.name);
                    }
                }
            }
        }
    }

    Ok(())
}

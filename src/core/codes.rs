use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_main_code, insert_sub_code, load_taxonomy};
use crate::errors::{AppError, AppResult};
use crate::models::codes::Taxonomy;
use crate::ui::messages::success;

/// Maintenance of the main/sub activity code taxonomy.
pub struct CodeLogic;

impl CodeLogic {
    pub fn add_main(pool: &mut DbPool, code: &str, name: &str) -> AppResult<i64> {
        if code.trim().is_empty() || code.trim().eq_ignore_ascii_case("none") {
            return Err(AppError::Other(format!("Invalid main code '{}'", code)));
        }

        let id = insert_main_code(&pool.conn, code, name)?;
        ttlog_soft(&pool.conn, "code", code.trim(), &format!("Main code added: {}", name.trim()));
        success(format!("Main code {} added.", code.trim()));
        Ok(id)
    }

    pub fn add_sub(pool: &mut DbPool, main: &str, code: &str, name: &str) -> AppResult<i64> {
        if code.trim().is_empty() {
            return Err(AppError::Other("Sub code cannot be empty".into()));
        }

        let taxonomy = load_taxonomy(&pool.conn)?;
        let parent = taxonomy
            .main_by_code(main)
            .ok_or_else(|| AppError::UnknownMainCode(main.to_string()))?;

        let id = insert_sub_code(&pool.conn, parent.id, code, name)?;
        let target = format!("{}/{}", parent.code, code.trim());
        ttlog_soft(&pool.conn, "code", &target, &format!("Sub code added: {}", name.trim()));
        success(format!("Sub code {} added.", target));
        Ok(id)
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Taxonomy> {
        load_taxonomy(&pool.conn)
    }
}

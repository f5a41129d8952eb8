pub mod add;
pub mod code;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;

use crate::cli::parser::EntryFields;
use crate::core::edit::EntryEdit;

impl From<&EntryFields> for EntryEdit {
    fn from(f: &EntryFields) -> Self {
        EntryEdit {
            from: f.from.clone(),
            to: f.to.clone(),
            main: f.main.clone(),
            sub: f.sub.clone(),
            description: f.desc.clone(),
            ..Default::default()
        }
    }
}

//! Unified application error type.
//! All modules (db, core, cli, config) return AppError to keep the error
//! handling consistent. The duration/cascade engine never produces one.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Taxonomy / report lookups
    // ---------------------------
    #[error("Unknown main code: {0}")]
    UnknownMainCode(String),

    #[error("Unknown sub code '{sub}' for main code '{main}'")]
    UnknownSubCode { main: String, sub: String },

    #[error("Sub code '{0}' requires a main code on the entry")]
    SubCodeWithoutMain(String),

    #[error("Code already exists: {0}")]
    DuplicateCode(String),

    #[error("No daily report for well '{well}' on {date}")]
    NoReport { well: String, date: String },

    #[error("Invalid line number: {0}")]
    InvalidLine(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Other(format!("JSON serialization failed: {}", e))
    }
}

pub type AppResult<T> = Result<T, AppError>;

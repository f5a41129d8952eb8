pub mod codes;
pub mod report;
pub mod time_log;

pub mod add;
pub mod cascade;
pub mod codes;
pub mod del;
pub mod duration;
pub mod edit;
pub mod log;
pub mod maintenance;
pub mod summary;

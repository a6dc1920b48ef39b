pub mod config;
pub mod format;
pub mod indicators;
pub mod logger;

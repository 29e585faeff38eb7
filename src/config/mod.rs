mod config;

pub use config::{Config, DEFAULT_LOGFILE, DEFAULT_REFERENCE, REFERENCE_ENV};

use thiserror::Error;

use crate::domain::fleet_report::ParseError;
use crate::domain::uptime::UptimeError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to initialize logging: {0}")]
    LoggingInit(String),
    #[error("invalid arguments: {0}")]
    Config(String),
    #[error("failed to read input file {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed input: {0}")]
    Parse(#[from] ParseError),
    #[error("invalid computation state: {0}")]
    Uptime(#[from] UptimeError),
}

impl AppError {
    pub fn logging_init<E: std::fmt::Display>(error: E) -> Self {
        Self::LoggingInit(error.to_string())
    }

    pub fn config<E: std::fmt::Display>(error: E) -> Self {
        Self::Config(error.to_string())
    }
}

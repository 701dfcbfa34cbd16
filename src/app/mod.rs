mod config;
mod error;
mod logging;
mod runtime;

pub use error::AppError;

pub fn run() -> Result<(), AppError> {
    logging::init()?;

    let config = config::AppConfig::from_args()?;

    tracing::info!(input_path = %config.input_path, "station uptime run starting");

    runtime::run(config)
}

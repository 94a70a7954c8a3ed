use crate::config::Environment;
use crate::error::{AppError, Result};
use tracing_appender::rolling::{self, Rotation};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "app";
const MAX_LOG_FILES: usize = 3;

/// Console output goes through the progress bar writer, file output rotates daily.
pub fn init(env: Environment) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env.default_log_level()));

    let file_appender = rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(LOG_DIR)
        .map_err(|e| AppError::Other(e.into()))?;

    let (json_file, text_file) = match env {
        Environment::Prod => (
            Some(fmt::layer().json().with_writer(file_appender)),
            None,
        ),
        Environment::Dev => (
            None,
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(file_appender),
            ),
        ),
    };

    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(json_file)
        .with(text_file)
        .with(indicatif_layer)
        .try_init()
        .map_err(|e| AppError::Other(e.into()))?;

    Ok(())
}

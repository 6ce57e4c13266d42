// src/logging.rs

use crate::config::Config;
use crate::errors::{ParleyError, ParleyResult};
use crate::models::ApiCallLog;
use env_logger::{Builder, Target};
use std::fs::OpenOptions;

/// Installs `env_logger` writing to the configured log file. The terminal
/// belongs to the UI, so nothing is written to stderr. `RUST_LOG` takes
/// precedence over the configured level.
pub fn init_logging(config: &Config) -> ParleyResult<()> {
    let level = config.level_filter()?;

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&config.log_file)
        .map_err(|e| {
            ParleyError::logging_error(format!(
                "Failed to open log file {}: {}",
                config.log_file, e
            ))
        })?;

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| ParleyError::logging_error(format!("Failed to install logger: {}", e)))
}

pub fn format_api_call(log: &ApiCallLog) -> String {
    let status = log
        .response_status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "none".to_string());

    format!(
        "[{}] {} - {} - Status: {} - Time: {}ms",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        status,
        log.response_time_ms
    )
}

/// Logs an API call record.
pub fn log_api_call(log: &ApiCallLog) {
    log::info!("{}", format_api_call(log));
}

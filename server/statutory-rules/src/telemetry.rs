//! Tracing setup shared by every binary in the workspace. Logs go to stderr; stdout carries JSON.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
  #[error("invalid log filter '{value}': {source}")]
  EnvFilter { value: String, source: ParseError },

  #[error("telemetry: {0}")]
  Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// `RUST_LOG` wins; otherwise `default_filter` (e.g. "warn").
pub fn init(default_filter: &str) -> Result<(), TelemetryError> {
  let env_filter = match EnvFilter::try_from_default_env() {
    Ok(filter) => filter,
    Err(_) => EnvFilter::try_new(default_filter).map_err(|source| TelemetryError::EnvFilter {
      value: default_filter.to_string(),
      source,
    })?,
  };

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .compact()
    .with_ansi(false)
    .try_init()
    .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn second_init_reports_instead_of_panicking() {
    let _ = init("warn");
    assert!(matches!(init("warn"), Err(TelemetryError::Subscriber(_))));
  }
}

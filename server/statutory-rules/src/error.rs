//! Structured error types for the statutory rules.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatutoryError {
  #[error("config: {field}: {reason}")]
  Config { field: String, reason: String },

  #[error("deadline overflow: cannot add {days} days")]
  DateOverflow { days: u32 },

  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl StatutoryError {
  pub fn config(field: &str, reason: &str) -> Self {
    Self::Config {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }
}

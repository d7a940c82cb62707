//! Output line types for the batch stream (JSON contract with the audit store).

use serde::Serialize;
use suprimento_risk_engine::RiskAssessment;

/// One scored accountability.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentLine {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub process_id: Option<String>,
  /// Stable digest of the normalized snapshot ("rk-" + 16 hex chars).
  pub input_digest: String,
  pub assessment: RiskAssessment,
}

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  /// 1-based input line number.
  pub line: usize,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(line: usize, message: impl Into<String>) -> Self {
    Self {
      error: true,
      line,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchOutput {
  Assessment(AssessmentLine),
  Error(ErrorOutput),
}

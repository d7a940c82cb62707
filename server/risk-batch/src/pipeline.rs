//! Line-by-line batch scoring with per-run counters.

use std::collections::BTreeMap;

use suprimento_risk_engine::normalize::normalize;
use suprimento_risk_engine::{assess, EngineError, InboundSnapshot, RiskLevel, ScoringConfig};

use crate::digest::input_digest;
use crate::types::{AssessmentLine, BatchOutput, ErrorOutput};

/// Counts for the end-of-run log line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
  pub scored: u64,
  pub rejected: u64,
  pub by_level: BTreeMap<RiskLevel, u64>,
}

pub struct Pipeline {
  config: ScoringConfig,
  summary: BatchSummary,
}

impl Pipeline {
  pub fn new(config: ScoringConfig) -> Self {
    Self {
      config,
      summary: BatchSummary::default(),
    }
  }

  pub fn with_defaults() -> Self {
    Self::new(ScoringConfig::default())
  }

  pub fn summary(&self) -> &BatchSummary {
    &self.summary
  }

  /// Score one input line. Blank lines produce no output.
  pub fn process_line(&mut self, line_no: usize, line: &str) -> Option<BatchOutput> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
      return None;
    }

    let raw: InboundSnapshot = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => return Some(self.reject(ErrorOutput::new(line_no, format!("json parse: {}", e)))),
    };

    let snapshot = match normalize(&raw) {
      Ok(s) => s,
      Err(e) => {
        let err = match &e {
          EngineError::Validation { field, reason } => {
            ErrorOutput::new(line_no, reason.clone()).with_field(field.clone())
          }
          _ => ErrorOutput::new(line_no, e.to_string()),
        };
        return Some(self.reject(err));
      }
    };

    let input_digest = match input_digest(&snapshot) {
      Ok(d) => d,
      Err(e) => return Some(self.reject(ErrorOutput::new(line_no, format!("digest: {}", e)))),
    };

    let assessment = assess(&snapshot, &self.config);
    self.summary.scored += 1;
    *self.summary.by_level.entry(assessment.level).or_insert(0) += 1;

    Some(BatchOutput::Assessment(AssessmentLine {
      process_id: raw.process_id,
      input_digest,
      assessment,
    }))
  }

  fn reject(&mut self, err: ErrorOutput) -> BatchOutput {
    tracing::debug!(line = err.line, message = %err.message, "rejected input line");
    self.summary.rejected += 1;
    BatchOutput::Error(err)
  }
}

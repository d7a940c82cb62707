//! Scoring weights and thresholds with the portal's defaults.
//!
//! These are fraud heuristics, not statute: every weight is tunable and can be
//! overridden from a JSON file without touching the rules.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
  /// Added when an accountability has no receipts at all.
  pub no_receipts_penalty: i32,
  /// Manual-receipt share above which the documentary warning fires (strict).
  pub manual_ratio_threshold: f64,
  /// Points per unit of manual ratio (ratio 1.0 => full weight).
  pub manual_ratio_weight: f64,
  /// Amounts that are whole multiples of this many cents count as round values.
  pub round_value_multiple_cents: i64,
  /// Round-value receipts tolerated before the heuristic fires (strict `>`).
  pub round_value_max_count: usize,
  pub round_value_penalty: i32,
  pub attention_penalty: i32,
  pub regular_penalty: i32,
  /// Subtracted for requesters with an excellent track record.
  pub excellent_bonus: i32,
  /// Reconciliation noise tolerated, in reais (strict `>`).
  pub reconciliation_tolerance: f64,
  pub reconciliation_penalty: i32,
  pub critical_threshold: u8,
  pub high_threshold: u8,
  pub medium_threshold: u8,
}

impl Default for ScoringConfig {
  fn default() -> Self {
    Self {
      no_receipts_penalty: 100,
      manual_ratio_threshold: 0.5,
      manual_ratio_weight: 30.0,
      round_value_multiple_cents: 5000,
      round_value_max_count: 2,
      round_value_penalty: 15,
      attention_penalty: 30,
      regular_penalty: 10,
      excellent_bonus: 10,
      reconciliation_tolerance: 0.05,
      reconciliation_penalty: 50,
      critical_threshold: 80,
      high_threshold: 50,
      medium_threshold: 20,
    }
  }
}

impl ScoringConfig {
  /// Parse a (possibly partial) JSON config; missing fields keep their defaults.
  pub fn from_json_str(raw: &str) -> Result<Self, EngineError> {
    let config: Self = serde_json::from_str(raw)?;
    config.validate()?;
    Ok(config)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
    let raw = std::fs::read_to_string(path)?;
    Self::from_json_str(&raw)
  }

  pub fn validate(&self) -> Result<(), EngineError> {
    // Penalties only add risk and the bonus only removes it, so every weight is >= 0.
    let weights = [
      ("no_receipts_penalty", self.no_receipts_penalty),
      ("round_value_penalty", self.round_value_penalty),
      ("attention_penalty", self.attention_penalty),
      ("regular_penalty", self.regular_penalty),
      ("excellent_bonus", self.excellent_bonus),
      ("reconciliation_penalty", self.reconciliation_penalty),
    ];
    if let Some((field, _)) = weights.iter().find(|(_, w)| *w < 0) {
      return Err(EngineError::config(field, "must not be negative"));
    }
    if !(self.manual_ratio_weight.is_finite() && self.manual_ratio_weight >= 0.0) {
      return Err(EngineError::config("manual_ratio_weight", "must not be negative"));
    }
    if !(0.0..=1.0).contains(&self.manual_ratio_threshold) {
      return Err(EngineError::config("manual_ratio_threshold", "must be in [0, 1]"));
    }
    if self.round_value_multiple_cents <= 0 {
      return Err(EngineError::config(
        "round_value_multiple_cents",
        "must be positive",
      ));
    }
    if !(self.reconciliation_tolerance.is_finite() && self.reconciliation_tolerance >= 0.0) {
      return Err(EngineError::config(
        "reconciliation_tolerance",
        "must be a non-negative amount",
      ));
    }
    if !(self.medium_threshold < self.high_threshold
      && self.high_threshold < self.critical_threshold
      && self.critical_threshold <= 100)
    {
      return Err(EngineError::config(
        "thresholds",
        "expected medium < high < critical <= 100",
      ));
    }
    Ok(())
  }
}

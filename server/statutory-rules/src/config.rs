//! Statutory constants table with the current regulatory defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StatutoryError;

/// Regulatory parameters for advance funds. Loaded once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatutoryConstants {
  /// INSS contribution rate on personal-service payments.
  pub inss_rate: f64,
  /// Contribution ceiling (teto do INSS); withholding never exceeds `inss_ceiling * inss_rate`.
  pub inss_ceiling: f64,
  /// Maximum value of an ordinary advance-fund grant.
  pub ordinary_fund_limit: f64,
  pub application_period_ordinary_days: u32,
  pub application_period_extraordinary_days: u32,
  /// Days after the application period ends to submit the accountability.
  pub accountability_period_days: u32,
  /// Expense element codes (natureza de despesa) payable with advance funds.
  pub allowed_expense_element_codes: Vec<String>,
}

impl Default for StatutoryConstants {
  fn default() -> Self {
    Self {
      inss_rate: 0.11,
      inss_ceiling: 8157.41,
      ordinary_fund_limit: 15000.0,
      application_period_ordinary_days: 90,
      application_period_extraordinary_days: 30,
      accountability_period_days: 30,
      allowed_expense_element_codes: vec![
        "3.3.90.30".to_string(),
        "3.3.90.33".to_string(),
        "3.3.90.36".to_string(),
        "3.3.90.39".to_string(),
      ],
    }
  }
}

impl StatutoryConstants {
  /// Parse a (possibly partial) JSON table; missing fields keep their defaults.
  pub fn from_json_str(raw: &str) -> Result<Self, StatutoryError> {
    let table: Self = serde_json::from_str(raw)?;
    table.validate()?;
    Ok(table)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self, StatutoryError> {
    let raw = std::fs::read_to_string(path)?;
    Self::from_json_str(&raw)
  }

  pub fn validate(&self) -> Result<(), StatutoryError> {
    if !(self.inss_rate > 0.0 && self.inss_rate <= 1.0) {
      return Err(StatutoryError::config("inss_rate", "must be in (0, 1]"));
    }
    if !(self.inss_ceiling.is_finite() && self.inss_ceiling > 0.0) {
      return Err(StatutoryError::config("inss_ceiling", "must be a positive amount"));
    }
    if !(self.ordinary_fund_limit.is_finite() && self.ordinary_fund_limit > 0.0) {
      return Err(StatutoryError::config(
        "ordinary_fund_limit",
        "must be a positive amount",
      ));
    }
    if self.allowed_expense_element_codes.is_empty() {
      return Err(StatutoryError::config(
        "allowed_expense_element_codes",
        "must list at least one code",
      ));
    }
    Ok(())
  }
}

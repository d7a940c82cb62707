//! Result and request types shared by the validators (JSON contracts).

use serde::{Deserialize, Serialize};

/// Outcome of a validator: never an error for expected domain conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
  pub valid: bool,
  pub errors: Vec<String>,
}

impl ValidationOutcome {
  pub fn ok() -> Self {
    Self {
      valid: true,
      errors: Vec::new(),
    }
  }

  /// Valid iff no errors were collected.
  pub fn from_errors(errors: Vec<String>) -> Self {
    Self {
      valid: errors.is_empty(),
      errors,
    }
  }
}

/// Ordinary grants follow the regular calendar; extraordinary ones cover urgent expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundKind {
  #[serde(alias = "ORDINARY", alias = "ordinario", alias = "ORDINARIO")]
  Ordinary,
  #[serde(alias = "EXTRAORDINARY", alias = "extraordinario", alias = "EXTRAORDINARIO")]
  Extraordinary,
}

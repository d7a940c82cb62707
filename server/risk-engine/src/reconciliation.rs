//! Reconciliation signal: granted must equal spent plus returned.

use suprimento_statutory::format_brl;

use crate::config::ScoringConfig;
use crate::types::{AccountabilityRecord, FlagSeverity, RiskFlag};

/// Float noise from summing money values (10.00 - 9.95 != 0.05 exactly).
const GAP_EPSILON: f64 = 1e-9;

/// `|granted - (spent + returned)|`.
pub fn reconciliation_gap(record: &AccountabilityRecord) -> f64 {
  (record.granted_value - (record.spent_value + record.returned_value)).abs()
}

/// Fires only when the gap is strictly above the tolerance, beyond float noise.
pub fn reconciliation_flag(record: &AccountabilityRecord, config: &ScoringConfig) -> Option<RiskFlag> {
  let gap = reconciliation_gap(record);
  if gap - config.reconciliation_tolerance > GAP_EPSILON {
    Some(RiskFlag::new(
      FlagSeverity::Danger,
      format!(
        "critical reconciliation mismatch (> {}): difference of {}",
        format_brl(config.reconciliation_tolerance),
        format_brl(gap)
      ),
      config.reconciliation_penalty,
    ))
  } else {
    None
  }
}

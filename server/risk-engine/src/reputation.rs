//! Reputation signal from the requester's precomputed tier.

use crate::config::ScoringConfig;
use crate::types::{FlagSeverity, ReputationTier, RiskFlag};

/// At most one flag. Unrecognized or missing tiers contribute nothing.
pub fn reputation_flag(tier: Option<&ReputationTier>, config: &ScoringConfig) -> Option<RiskFlag> {
  match tier? {
    ReputationTier::Attention => Some(RiskFlag::new(
      FlagSeverity::Danger,
      "requester with high history of returns/rejections",
      config.attention_penalty,
    )),
    ReputationTier::Regular => Some(RiskFlag::new(
      FlagSeverity::Warning,
      "requester with recent incidents",
      config.regular_penalty,
    )),
    ReputationTier::Excellent => Some(RiskFlag::new(
      FlagSeverity::Info,
      "requester with excellent track record (bonus)",
      config.excellent_bonus.saturating_neg(),
    )),
    ReputationTier::Unrecognized(_) => None,
  }
}

//! Raw score aggregation, clamping, and tier mapping.

use crate::config::ScoringConfig;
use crate::types::{RiskFlag, RiskLevel};

/// Sum of flag impacts, clamped to 0..=100.
pub fn compute_score(flags: &[RiskFlag]) -> u8 {
  let raw: i64 = flags.iter().map(|f| i64::from(f.impact)).sum();
  raw.clamp(0, 100) as u8
}

/// Highest tier whose threshold the score reaches.
pub fn level_for(score: u8, config: &ScoringConfig) -> RiskLevel {
  if score >= config.critical_threshold {
    RiskLevel::Critical
  } else if score >= config.high_threshold {
    RiskLevel::High
  } else if score >= config.medium_threshold {
    RiskLevel::Medium
  } else {
    RiskLevel::Low
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::FlagSeverity;

  fn flags(impacts: &[i32]) -> Vec<RiskFlag> {
    impacts
      .iter()
      .map(|&i| RiskFlag::new(FlagSeverity::Info, "x", i))
      .collect()
  }

  #[test]
  fn clamps_both_ends() {
    assert_eq!(compute_score(&flags(&[])), 0);
    assert_eq!(compute_score(&flags(&[-10])), 0);
    assert_eq!(compute_score(&flags(&[100, 30, 50])), 100);
    assert_eq!(compute_score(&flags(&[30, -10, 15])), 35);
    assert_eq!(compute_score(&flags(&[i32::MAX, i32::MAX])), 100);
  }

  #[test]
  fn tier_boundaries() {
    let config = ScoringConfig::default();
    let cases = [
      (0, RiskLevel::Low),
      (19, RiskLevel::Low),
      (20, RiskLevel::Medium),
      (49, RiskLevel::Medium),
      (50, RiskLevel::High),
      (79, RiskLevel::High),
      (80, RiskLevel::Critical),
      (100, RiskLevel::Critical),
    ];
    for (score, expected) in cases {
      assert_eq!(level_for(score, &config), expected, "score {}", score);
    }
  }
}

//! Documentary signals: missing receipts, manual proof, round-number amounts.

use crate::config::ScoringConfig;
use crate::types::{FlagSeverity, ReceiptLineItem, RiskFlag};

/// Flags from the receipt list, in rule order.
pub fn documentary_flags(receipts: &[ReceiptLineItem], config: &ScoringConfig) -> Vec<RiskFlag> {
  if receipts.is_empty() {
    return vec![RiskFlag::new(
      FlagSeverity::Danger,
      "no receipts attached",
      config.no_receipts_penalty,
    )];
  }

  let mut flags = Vec::new();

  let ratio = manual_ratio(receipts);
  if ratio > config.manual_ratio_threshold {
    let impact = (ratio * config.manual_ratio_weight).round() as i32;
    flags.push(RiskFlag::new(
      FlagSeverity::Warning,
      format!(
        "{}% of receipts are manual or not machine-verifiable",
        (ratio * 100.0).round() as i64
      ),
      impact,
    ));
  }

  let round_count = receipts
    .iter()
    .filter(|r| is_round_value(r.amount, config.round_value_multiple_cents))
    .count();
  if round_count > config.round_value_max_count {
    flags.push(RiskFlag::new(
      FlagSeverity::Info,
      format!(
        "multiple round-number values detected ({} receipts)",
        round_count
      ),
      config.round_value_penalty,
    ));
  }

  flags
}

/// Share of receipts whose kind cannot be checked against an issuer.
pub fn manual_ratio(receipts: &[ReceiptLineItem]) -> f64 {
  if receipts.is_empty() {
    return 0.0;
  }
  let manual = receipts
    .iter()
    .filter(|r| !r.kind.is_auto_verifiable())
    .count();
  manual as f64 / receipts.len() as f64
}

/// Whole multiple of `multiple_cents`, compared in cents. Zero is not a round value.
pub fn is_round_value(amount: f64, multiple_cents: i64) -> bool {
  let cents = (amount * 100.0).round() as i64;
  multiple_cents > 0 && cents > 0 && cents % multiple_cents == 0
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::ReceiptKind;

  fn receipt(kind: ReceiptKind, amount: f64) -> ReceiptLineItem {
    ReceiptLineItem { kind, amount }
  }

  #[test]
  fn empty_receipts_saturate() {
    let flags = documentary_flags(&[], &ScoringConfig::default());
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].severity, FlagSeverity::Danger);
    assert_eq!(flags[0].impact, 100);
    assert_eq!(flags[0].message, "no receipts attached");
  }

  #[test]
  fn manual_majority_scales_with_ratio() {
    let receipts = vec![
      receipt(ReceiptKind::ManualReceipt, 12.34),
      receipt(ReceiptKind::Other, 56.78),
      receipt(ReceiptKind::FiscalCoupon, 9.99),
    ];
    let flags = documentary_flags(&receipts, &ScoringConfig::default());
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].severity, FlagSeverity::Warning);
    assert_eq!(flags[0].impact, 20);
    assert!(flags[0].message.starts_with("67%"));
  }

  #[test]
  fn exactly_half_manual_does_not_fire() {
    let receipts = vec![
      receipt(ReceiptKind::ManualReceipt, 12.34),
      receipt(ReceiptKind::Ticket, 56.78),
    ];
    assert!(documentary_flags(&receipts, &ScoringConfig::default()).is_empty());
  }

  #[test]
  fn all_manual_takes_full_weight() {
    let receipts = vec![receipt(ReceiptKind::ManualReceipt, 12.34)];
    let flags = documentary_flags(&receipts, &ScoringConfig::default());
    assert_eq!(flags[0].impact, 30);
    assert!(flags[0].message.starts_with("100%"));
  }

  #[test]
  fn round_values_need_more_than_two() {
    let config = ScoringConfig::default();
    let two = vec![
      receipt(ReceiptKind::Ticket, 100.0),
      receipt(ReceiptKind::Ticket, 50.0),
      receipt(ReceiptKind::Ticket, 73.10),
    ];
    assert!(documentary_flags(&two, &config).is_empty());

    let three = vec![
      receipt(ReceiptKind::Ticket, 100.0),
      receipt(ReceiptKind::Ticket, 50.0),
      receipt(ReceiptKind::Ticket, 250.0),
    ];
    let flags = documentary_flags(&three, &config);
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].severity, FlagSeverity::Info);
    assert_eq!(flags[0].impact, 15);
    assert!(flags[0].message.contains("round-number"));
  }

  #[test]
  fn round_value_detection_works_in_cents() {
    assert!(is_round_value(150.0, 5000));
    assert!(is_round_value(200.0000001, 5000));
    assert!(!is_round_value(150.01, 5000));
    assert!(!is_round_value(25.0, 5000));
    assert!(!is_round_value(0.0, 5000));
  }

  #[test]
  fn round_value_threshold_is_configurable() {
    let config = ScoringConfig {
      round_value_max_count: 3,
      round_value_penalty: 25,
      ..ScoringConfig::default()
    };
    let receipts: Vec<_> = (1..=4)
      .map(|i| receipt(ReceiptKind::FiscalCoupon, 100.0 * i as f64))
      .collect();
    let flags = documentary_flags(&receipts, &config);
    assert_eq!(flags[0].impact, 25);
    assert!(documentary_flags(&receipts[..3], &config).is_empty());
  }

  #[test]
  fn manual_flag_precedes_round_value_flag() {
    let receipts = vec![
      receipt(ReceiptKind::ManualReceipt, 100.0),
      receipt(ReceiptKind::ManualReceipt, 200.0),
      receipt(ReceiptKind::ManualReceipt, 300.0),
    ];
    let flags = documentary_flags(&receipts, &ScoringConfig::default());
    assert_eq!(flags.len(), 2);
    assert_eq!(flags[0].severity, FlagSeverity::Warning);
    assert_eq!(flags[1].severity, FlagSeverity::Info);
  }
}

//! Validate inbound snapshots into the canonical `Snapshot` the rules assume.
//!
//! This is the only place that looks at loosely typed input. After it, every
//! money field is a finite, non-negative f64.

use crate::error::EngineError;
use crate::types::*;

pub fn normalize(raw: &InboundSnapshot) -> Result<Snapshot, EngineError> {
  let granted_value = match &raw.record.granted_value {
    Some(v) => parse_amount(v, "record.granted_value")?,
    None => return Err(EngineError::validation("record.granted_value", "required")),
  };
  let spent_value = optional_amount(&raw.record.spent_value, "record.spent_value")?;
  let returned_value = optional_amount(&raw.record.returned_value, "record.returned_value")?;

  let receipts = raw
    .receipts
    .iter()
    .map(|r| {
      Ok(ReceiptLineItem {
        kind: ReceiptKind::from_str_loose(&r.kind),
        amount: parse_amount(&r.amount, "receipts[].amount")?,
      })
    })
    .collect::<Result<Vec<_>, EngineError>>()?;

  let reputation = raw.reputation.as_ref().map(|r| {
    let tier = ReputationTier::from_str_loose(&r.tier);
    if let ReputationTier::Unrecognized(value) = &tier {
      tracing::warn!(tier = %value, "unrecognized reputation tier, scoring as neutral");
    }
    tier
  });

  Ok(Snapshot {
    record: AccountabilityRecord {
      granted_value,
      spent_value,
      returned_value,
    },
    receipts,
    reputation,
  })
}

fn optional_amount(v: &Option<LooseAmount>, field: &str) -> Result<f64, EngineError> {
  match v {
    Some(v) => parse_amount(v, field),
    None => Ok(0.0),
  }
}

const NOT_A_NUMBER: &str = "not a number";
const AMBIGUOUS: &str = "ambiguous separator, write 1234.000 or 1.234,00";

/// Finite, non-negative money. Text accepts `1234.56` and Brazilian `1.234,56`.
fn parse_amount(v: &LooseAmount, field: &str) -> Result<f64, EngineError> {
  let value = match v {
    LooseAmount::Number(n) => *n,
    LooseAmount::Text(s) => parse_amount_text(s)
      .map_err(|reason| EngineError::validation(field, &format!("{}: {:?}", reason, s)))?,
  };
  if !value.is_finite() {
    return Err(EngineError::validation(field, "must be finite"));
  }
  if value < 0.0 {
    return Err(EngineError::validation(field, "must not be negative"));
  }
  Ok(value)
}

fn parse_amount_text(s: &str) -> Result<f64, &'static str> {
  let s = s.trim().trim_start_matches("R$").trim();
  let (sign, body) = match s.strip_prefix('-') {
    Some(rest) => ("-", rest.trim_start()),
    None => ("", s),
  };
  let canonical = canonical_decimal(body)?;
  format!("{}{}", sign, canonical)
    .parse::<f64>()
    .map_err(|_| NOT_A_NUMBER)
}

/// Rewrites one of the two accepted forms into `digits[.digits]`:
/// - dot decimal: `1234`, `1234.56`
/// - Brazilian: `1234,56`, `1.234,56`, `1.234.567`
///
/// A single dot followed by exactly three digits (`1.234`) reads both ways and is rejected.
fn canonical_decimal(s: &str) -> Result<String, &'static str> {
  if let Some((int, frac)) = s.split_once(',') {
    if !is_digits(frac) {
      return Err(NOT_A_NUMBER);
    }
    let int = grouped_integer(int).ok_or(NOT_A_NUMBER)?;
    return Ok(format!("{}.{}", int, frac));
  }

  let parts: Vec<&str> = s.split('.').collect();
  match parts.as_slice() {
    [int] if is_digits(int) => Ok(int.to_string()),
    [int, frac] if is_digits(int) && is_digits(frac) => {
      if int.len() <= 3 && frac.len() == 3 {
        Err(AMBIGUOUS)
      } else {
        Ok(format!("{}.{}", int, frac))
      }
    }
    _ => grouped_integer(s).ok_or(NOT_A_NUMBER),
  }
}

/// `1.234.567` -> `1234567`. Ungrouped digits pass through.
fn grouped_integer(s: &str) -> Option<String> {
  if !s.contains('.') {
    return is_digits(s).then(|| s.to_string());
  }
  let mut groups = s.split('.');
  let head = groups.next()?;
  if !(is_digits(head) && head.len() <= 3) {
    return None;
  }
  let mut out = head.to_string();
  for group in groups {
    if !(is_digits(group) && group.len() == 3) {
      return None;
    }
    out.push_str(group);
  }
  Some(out)
}

fn is_digits(s: &str) -> bool {
  !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn inbound(json: &str) -> InboundSnapshot {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn accepts_numbers_and_numeric_strings() {
    let raw = inbound(
      r#"{
        "record": {"granted_value": "1.234,56", "spent_value": 1000, "returned_value": "234.56"},
        "receipts": [{"kind": "cupom_fiscal", "amount": "R$ 80,00"}],
        "reputation": {"tier": "excelente"}
      }"#,
    );
    let snap = normalize(&raw).unwrap();
    assert!((snap.record.granted_value - 1234.56).abs() < 1e-9);
    assert_eq!(snap.record.spent_value, 1000.0);
    assert!((snap.record.returned_value - 234.56).abs() < 1e-9);
    assert_eq!(snap.receipts[0].kind, ReceiptKind::FiscalCoupon);
    assert_eq!(snap.receipts[0].amount, 80.0);
    assert_eq!(snap.reputation, Some(ReputationTier::Excellent));
  }

  #[test]
  fn missing_granted_value_names_the_field() {
    let raw = inbound(r#"{"record": {"spent_value": 10}}"#);
    let err = normalize(&raw).unwrap_err();
    assert!(err.to_string().contains("record.granted_value"));
  }

  #[test]
  fn spent_and_returned_default_to_zero() {
    let raw = inbound(r#"{"record": {"granted_value": 0}}"#);
    let snap = normalize(&raw).unwrap();
    assert_eq!(snap.record.spent_value, 0.0);
    assert_eq!(snap.record.returned_value, 0.0);
    assert!(snap.receipts.is_empty());
    assert!(snap.reputation.is_none());
  }

  #[test]
  fn rejects_negative_and_garbage_amounts() {
    let raw = inbound(r#"{"record": {"granted_value": -5}}"#);
    assert!(normalize(&raw).unwrap_err().to_string().contains("negative"));

    let raw = inbound(
      r#"{"record": {"granted_value": 10}, "receipts": [{"kind": "recibo", "amount": "abc"}]}"#,
    );
    assert!(normalize(&raw)
      .unwrap_err()
      .to_string()
      .contains("receipts[].amount"));
  }

  fn granted(json_value: &str) -> Result<f64, EngineError> {
    let raw = inbound(&format!(r#"{{"record": {{"granted_value": {}}}}}"#, json_value));
    normalize(&raw).map(|snap| snap.record.granted_value)
  }

  #[test]
  fn accepts_both_decimal_conventions() {
    let cases = [
      (r#""1234""#, 1234.0),
      (r#""1234.56""#, 1234.56),
      (r#""1234,56""#, 1234.56),
      (r#""1.234,56""#, 1234.56),
      (r#""1.234.567""#, 1234567.0),
      (r#""1.234.567,8""#, 1234567.8),
      (r#""12.5""#, 12.5),
      (r#""1234.567""#, 1234.567),
    ];
    for (text, expected) in cases {
      let value = granted(text).unwrap();
      assert!((value - expected).abs() < 1e-9, "{} read as {}", text, value);
    }
  }

  #[test]
  fn mixed_separators_are_rejected() {
    for text in [r#""1,234.56""#, r#""1.23.4""#, r#""1,2,3""#, r#"",50""#, r#""12.""#] {
      let err = granted(text).unwrap_err();
      assert!(
        err.to_string().contains("not a number"),
        "{} should be rejected: {}",
        text,
        err
      );
    }
  }

  #[test]
  fn single_dot_with_three_decimals_is_ambiguous() {
    for text in [r#""1.234""#, r#""R$ 12.500""#] {
      let err = granted(text).unwrap_err();
      assert!(err.to_string().contains("ambiguous"), "{}: {}", text, err);
    }
    assert_eq!(granted(r#""1.234,00""#).unwrap(), 1234.0);
  }

  #[test]
  fn unknown_kinds_and_tiers_are_kept_not_rejected() {
    let raw = inbound(
      r#"{
        "record": {"granted_value": 10},
        "receipts": [{"kind": "boleto", "amount": 10}, {"amount": 5}],
        "reputation": {"tier": "GOLD"}
      }"#,
    );
    let snap = normalize(&raw).unwrap();
    assert_eq!(snap.receipts[0].kind, ReceiptKind::Other);
    assert_eq!(snap.receipts[1].kind, ReceiptKind::Other);
    assert_eq!(
      snap.reputation,
      Some(ReputationTier::Unrecognized("GOLD".into()))
    );
  }
}

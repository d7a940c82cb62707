//! Stable digest of a normalized snapshot, used to de-duplicate audit entries.

use suprimento_risk_engine::Snapshot;

/// blake3 over the canonical JSON of the snapshot. Insensitive to input
/// formatting (whitespace, string-vs-number money, label aliases).
pub fn input_digest(snapshot: &Snapshot) -> Result<String, serde_json::Error> {
  let canonical = serde_json::to_vec(snapshot)?;
  let hash = blake3::hash(&canonical);
  let hex = hash.to_hex();
  Ok(format!("rk-{}", &hex[..16]))
}

#[cfg(test)]
mod tests {
  use super::*;
  use suprimento_risk_engine::normalize::normalize;
  use suprimento_risk_engine::InboundSnapshot;

  fn snap(json: &str) -> Snapshot {
    let raw: InboundSnapshot = serde_json::from_str(json).unwrap();
    normalize(&raw).unwrap()
  }

  #[test]
  fn digest_ignores_input_formatting() {
    let a = snap(r#"{"record":{"granted_value":100,"spent_value":"100"},"receipts":[{"kind":"recibo","amount":100}]}"#);
    let b = snap(
      r#"{
        "record": {"granted_value": "100,00", "spent_value": 100.0},
        "receipts": [{"kind": "MANUAL_RECEIPT", "amount": "100"}]
      }"#,
    );
    let digest = input_digest(&a).unwrap();
    assert_eq!(digest, input_digest(&b).unwrap());
    assert!(digest.starts_with("rk-"));
    assert_eq!(digest.len(), 19);
  }

  #[test]
  fn digest_changes_with_content() {
    let a = snap(r#"{"record":{"granted_value":100}}"#);
    let b = snap(r#"{"record":{"granted_value":101}}"#);
    assert_ne!(input_digest(&a).unwrap(), input_digest(&b).unwrap());
  }

  #[test]
  fn unrecognized_tier_is_part_of_the_digest() {
    let gold = snap(r#"{"record":{"granted_value":10},"reputation":{"tier":"GOLD"}}"#);
    let silver = snap(r#"{"record":{"granted_value":10},"reputation":{"tier":"SILVER"}}"#);
    let none = snap(r#"{"record":{"granted_value":10}}"#);
    let gold = input_digest(&gold).unwrap();
    assert_ne!(gold, input_digest(&silver).unwrap());
    assert_ne!(gold, input_digest(&none).unwrap());
  }
}

//! Input/output types for the risk engine (JSON contract with the portal).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the caller sends)
// ---------------------------------------------------------------------------

/// One accountability snapshot as assembled by the portal. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundSnapshot {
  #[serde(default)]
  pub process_id: Option<String>,
  pub record: InboundRecord,
  #[serde(default)]
  pub receipts: Vec<InboundReceipt>,
  #[serde(default)]
  pub reputation: Option<InboundReputation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundRecord {
  #[serde(default)]
  pub granted_value: Option<LooseAmount>,
  #[serde(default)]
  pub spent_value: Option<LooseAmount>,
  #[serde(default)]
  pub returned_value: Option<LooseAmount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundReceipt {
  #[serde(default)]
  pub kind: String,
  pub amount: LooseAmount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundReputation {
  pub tier: String,
}

/// Money as the data layer hands it over: numeric columns sometimes arrive as strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseAmount {
  Number(f64),
  Text(String),
}

// ---------------------------------------------------------------------------
// Normalized types (what the rules see)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountabilityRecord {
  pub granted_value: f64,
  pub spent_value: f64,
  pub returned_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReceiptKind {
  Ticket,
  FiscalCoupon,
  TransportReimbursement,
  ManualReceipt,
  Other,
}

impl ReceiptKind {
  /// Case-insensitive; accepts the portal's Portuguese labels. Anything else is `Other`.
  pub fn from_str_loose(s: &str) -> Self {
    match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
      "ticket" | "passagem" | "bilhete" => Self::Ticket,
      "fiscal_coupon" | "cupom_fiscal" | "cupom" => Self::FiscalCoupon,
      "transport_reimbursement" | "ressarcimento_transporte" | "transporte" => {
        Self::TransportReimbursement
      }
      "manual_receipt" | "recibo" | "recibo_manual" => Self::ManualReceipt,
      _ => Self::Other,
    }
  }

  /// Proof that can be checked against an external issuer (airline, tax authority, transit).
  pub fn is_auto_verifiable(self) -> bool {
    matches!(
      self,
      Self::Ticket | Self::FiscalCoupon | Self::TransportReimbursement
    )
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptLineItem {
  pub kind: ReceiptKind,
  pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ReputationTier {
  Excellent,
  Regular,
  Attention,
  /// Preserved verbatim; scores as neutral.
  Unrecognized(String),
}

impl ReputationTier {
  pub fn from_str_loose(s: &str) -> Self {
    match s.trim().to_uppercase().as_str() {
      "EXCELLENT" | "EXCELENTE" => Self::Excellent,
      "REGULAR" => Self::Regular,
      "ATTENTION" | "ATENCAO" | "ATENÇÃO" => Self::Attention,
      _ => Self::Unrecognized(s.to_string()),
    }
  }
}

/// Canonical input to `assess` after boundary validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
  pub record: AccountabilityRecord,
  pub receipts: Vec<ReceiptLineItem>,
  pub reputation: Option<ReputationTier>,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: stored alongside the accountability for audit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlagSeverity {
  Info,
  Warning,
  Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFlag {
  pub severity: FlagSeverity,
  pub message: String,
  /// Points this rule added to the raw score (negative for bonuses).
  pub impact: i32,
}

impl RiskFlag {
  pub fn new(severity: FlagSeverity, message: impl Into<String>, impact: i32) -> Self {
    Self {
      severity,
      message: message.into(),
      impact,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
  Low,
  Medium,
  High,
  Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
  pub score: u8,
  pub level: RiskLevel,
  pub flags: Vec<RiskFlag>,
}

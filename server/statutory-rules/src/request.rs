//! Acceptance gate for a submitted advance-fund request.
//!
//! Runs the limit and element-code validators, derives both deadlines, and
//! computes withholding when the request pays a personal service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::StatutoryConstants;
use crate::deadlines::{accountability_deadline, application_deadline, is_overdue};
use crate::error::StatutoryError;
use crate::limits::{validate_expense_element_code, validate_ordinary_limit};
use crate::types::{FundKind, ValidationOutcome};
use crate::withholding::{calculate_net_value, calculate_withholding};

/// One request as submitted by the portal. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestInput {
  pub value: f64,
  pub element_code: String,
  pub fund_kind: FundKind,
  pub granted_at: DateTime<Utc>,
  /// Gross personal-service payment subject to INSS, if any.
  #[serde(default)]
  pub service_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithholdingSummary {
  pub gross_value: f64,
  pub withholding: f64,
  pub net_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestReport {
  /// Limit and element code both valid. Deadlines are informational.
  pub valid: bool,
  pub limit: ValidationOutcome,
  pub element_code: ValidationOutcome,
  pub application_deadline: DateTime<Utc>,
  pub accountability_deadline: DateTime<Utc>,
  pub application_overdue: bool,
  pub accountability_overdue: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub withholding: Option<WithholdingSummary>,
}

pub fn check_request(
  request: &RequestInput,
  now: DateTime<Utc>,
  table: &StatutoryConstants,
) -> Result<RequestReport, StatutoryError> {
  let limit = match request.fund_kind {
    FundKind::Ordinary => validate_ordinary_limit(request.value, table),
    // Extraordinary grants are not bound by the ordinary ceiling, only positivity.
    FundKind::Extraordinary if request.value > 0.0 => ValidationOutcome::ok(),
    FundKind::Extraordinary => {
      ValidationOutcome::from_errors(vec!["value must be greater than zero".to_string()])
    }
  };
  let element_code = validate_expense_element_code(&request.element_code, table);

  let application_end = application_deadline(request.granted_at, request.fund_kind, table)?;
  let accountability_end = accountability_deadline(application_end, table)?;

  let withholding = request.service_value.map(|gross| {
    let withheld = calculate_withholding(gross, table);
    WithholdingSummary {
      gross_value: gross,
      withholding: withheld,
      net_value: calculate_net_value(gross, withheld),
    }
  });

  Ok(RequestReport {
    valid: limit.valid && element_code.valid,
    limit,
    element_code,
    application_deadline: application_end,
    accountability_deadline: accountability_end,
    application_overdue: is_overdue(application_end, now),
    accountability_overdue: is_overdue(accountability_end, now),
    withholding,
  })
}

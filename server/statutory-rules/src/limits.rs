//! Spending-limit and expense-element checks for a submitted request.

use crate::config::StatutoryConstants;
use crate::money::format_brl;
use crate::types::ValidationOutcome;

/// Ordinary grants must be positive and at most the ordinary fund limit (inclusive).
pub fn validate_ordinary_limit(value: f64, table: &StatutoryConstants) -> ValidationOutcome {
  if !value.is_finite() {
    return ValidationOutcome::from_errors(vec!["value must be a finite amount".to_string()]);
  }

  let mut errors = Vec::new();
  if value <= 0.0 {
    errors.push("value must be greater than zero".to_string());
  }
  if value > table.ordinary_fund_limit {
    errors.push(format!(
      "value {} exceeds the ordinary fund limit of {}",
      format_brl(value),
      format_brl(table.ordinary_fund_limit)
    ));
  }
  ValidationOutcome::from_errors(errors)
}

/// Exact, case-sensitive membership in the allowed element codes.
pub fn validate_expense_element_code(code: &str, table: &StatutoryConstants) -> ValidationOutcome {
  if table.allowed_expense_element_codes.iter().any(|c| c == code) {
    ValidationOutcome::ok()
  } else {
    ValidationOutcome::from_errors(vec![format!(
      "expense element code '{}' is not allowed for advance funds",
      code
    )])
  }
}

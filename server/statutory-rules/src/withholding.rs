//! INSS withholding on personal-service payments.

use crate::config::StatutoryConstants;

/// `service_value * inss_rate`, capped at the ceiling contribution.
pub fn calculate_withholding(service_value: f64, table: &StatutoryConstants) -> f64 {
  let contribution = service_value * table.inss_rate;
  let cap = table.inss_ceiling * table.inss_rate;
  contribution.min(cap)
}

/// Amount payable after withholding. Not clamped: a negative result is the caller's to judge.
pub fn calculate_net_value(gross_value: f64, withholding: f64) -> f64 {
  gross_value - withholding
}

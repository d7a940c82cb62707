//! Calendar-day deadlines for applying and accounting for advance funds.

use chrono::{DateTime, Days, Utc};

use crate::config::StatutoryConstants;
use crate::error::StatutoryError;
use crate::types::FundKind;

/// Add `period_days` calendar days to `start`, keeping the time of day.
pub fn compute_deadline(
  start: DateTime<Utc>,
  period_days: u32,
) -> Result<DateTime<Utc>, StatutoryError> {
  start
    .checked_add_days(Days::new(u64::from(period_days)))
    .ok_or(StatutoryError::DateOverflow { days: period_days })
}

/// Overdue only strictly after the deadline; the deadline instant itself is still on time.
pub fn is_overdue(deadline: DateTime<Utc>, now: DateTime<Utc>) -> bool {
  now > deadline
}

pub fn application_period_days(kind: FundKind, table: &StatutoryConstants) -> u32 {
  match kind {
    FundKind::Ordinary => table.application_period_ordinary_days,
    FundKind::Extraordinary => table.application_period_extraordinary_days,
  }
}

/// Last day to spend the granted funds.
pub fn application_deadline(
  granted_at: DateTime<Utc>,
  kind: FundKind,
  table: &StatutoryConstants,
) -> Result<DateTime<Utc>, StatutoryError> {
  compute_deadline(granted_at, application_period_days(kind, table))
}

/// Last day to submit the accountability, counted from the end of the application period.
pub fn accountability_deadline(
  application_end: DateTime<Utc>,
  table: &StatutoryConstants,
) -> Result<DateTime<Utc>, StatutoryError> {
  compute_deadline(application_end, table.accountability_period_days)
}

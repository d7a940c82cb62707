//! Statutory rules for suprimento de fundos: withholding, limits, deadlines.
//!
//! Every function takes an explicit `StatutoryConstants` table; there is no
//! global state. No DB, no network; pure computation.

pub mod config;
pub mod deadlines;
pub mod error;
pub mod limits;
pub mod money;
pub mod request;
pub mod telemetry;
pub mod types;
pub mod withholding;

pub use config::StatutoryConstants;
pub use deadlines::{
  accountability_deadline, application_deadline, compute_deadline, is_overdue,
};
pub use error::StatutoryError;
pub use limits::{validate_expense_element_code, validate_ordinary_limit};
pub use money::format_brl;
pub use request::{check_request, RequestInput, RequestReport};
pub use types::{FundKind, ValidationOutcome};
pub use withholding::{calculate_net_value, calculate_withholding};

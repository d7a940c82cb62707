//! Batch scoring of accountability snapshots over JSON lines.
//!
//! Each non-blank input line yields exactly one output line: an assessment
//! with its input digest, or a structured error. No DB, no network.

pub mod digest;
pub mod pipeline;
pub mod types;

pub use pipeline::{BatchSummary, Pipeline};
pub use types::{AssessmentLine, BatchOutput, ErrorOutput};

//! Suprimento de Fundos risk engine: rule-based accountability scoring.
//!
//! Rules run in a fixed order (documentary, reputation, reconciliation) and
//! every rule that fires leaves a flag whose `impact` is the points it added.
//! The score is the clamped sum of impacts. No DB, no network; pure computation.
//! Used by the binary for stdin/stdout; can also be called as a library.

pub mod config;
pub mod documents;
pub mod error;
pub mod normalize;
pub mod reconciliation;
pub mod reputation;
pub mod score;
pub mod types;

pub use suprimento_statutory::telemetry;

pub use config::ScoringConfig;
pub use error::EngineError;
pub use types::{
  FlagSeverity, InboundSnapshot, RiskAssessment, RiskFlag, RiskLevel, Snapshot,
};

/// Env var naming a JSON file with `ScoringConfig` overrides.
pub const CONFIG_ENV: &str = "RISK_ENGINE_CONFIG";

/// Score a normalized snapshot (no I/O).
pub fn assess(snapshot: &Snapshot, config: &ScoringConfig) -> RiskAssessment {
  let mut flags = documents::documentary_flags(&snapshot.receipts, config);
  flags.extend(reputation::reputation_flag(
    snapshot.reputation.as_ref(),
    config,
  ));
  flags.extend(reconciliation::reconciliation_flag(&snapshot.record, config));

  let score = score::compute_score(&flags);
  RiskAssessment {
    score,
    level: score::level_for(score, config),
    flags,
  }
}

/// Validate loose input, then score it.
pub fn run(input: &InboundSnapshot, config: &ScoringConfig) -> Result<RiskAssessment, EngineError> {
  let snapshot = normalize::normalize(input)?;
  Ok(assess(&snapshot, config))
}

/// Scoring config from `RISK_ENGINE_CONFIG` if set, else defaults.
pub fn config_from_env() -> Result<ScoringConfig, EngineError> {
  match std::env::var(CONFIG_ENV) {
    Ok(path) if !path.trim().is_empty() => {
      tracing::info!(path = %path, "loading scoring config");
      ScoringConfig::load(path.trim())
    }
    _ => Ok(ScoringConfig::default()),
  }
}

//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is an accountability snapshot. Output lines are either:
//! - An AssessmentLine (score, level, flags, input digest)
//! - An ErrorOutput (when the line cannot be parsed or validated)
//!
//! Blank lines produce no output line.

use std::io::{self, BufRead, Write};

use suprimento_risk_batch::Pipeline;
use suprimento_risk_engine::{config_from_env, telemetry};

fn main() {
  if let Err(e) = telemetry::init("info") {
    let _ = writeln!(io::stderr(), "risk-batch: {}", e);
  }

  let config = match config_from_env() {
    Ok(c) => c,
    Err(e) => {
      tracing::error!(error = %e, "invalid scoring config");
      std::process::exit(2);
    }
  };

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let mut pipeline = Pipeline::new(config);

  for (idx, line) in stdin.lock().lines().enumerate() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        tracing::error!(error = %e, "read error");
        let _ = out.flush();
        std::process::exit(1);
      }
    };

    if let Some(output) = pipeline.process_line(idx + 1, &line) {
      let _ = serde_json::to_writer(&mut out, &output);
      let _ = writeln!(out);
    }
  }

  let _ = out.flush();

  let summary = pipeline.summary();
  tracing::info!(
    scored = summary.scored,
    rejected = summary.rejected,
    by_level = ?summary.by_level,
    "batch complete"
  );
}

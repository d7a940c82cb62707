//! Binary entrypoint: read one JSON snapshot from stdin, write one assessment to stdout.

use std::io::{self, Read, Write};

use suprimento_risk_engine::{config_from_env, run, telemetry, InboundSnapshot};

fn main() {
  if let Err(e) = telemetry::init("warn") {
    let _ = writeln!(io::stderr(), "risk-engine: {}", e);
  }
  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "risk-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let config = config_from_env()?;

  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let input: InboundSnapshot = serde_json::from_str(&raw)?;

  let out = run(&input, &config)?;
  tracing::debug!(
    process_id = input.process_id.as_deref().unwrap_or("-"),
    score = out.score,
    level = ?out.level,
    "assessed"
  );
  let json = serde_json::to_vec(&out)?;
  io::stdout().write_all(&json)?;
  Ok(())
}

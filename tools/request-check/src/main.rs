//! request-check: statutory acceptance check for an advance-fund request
//!
//! Usage:
//!   request-check <request.json>                 # print the report as JSON
//!   request-check <request.json> -q              # quiet: exit 0 if valid, 1 if not
//!   request-check <request.json> --now <rfc3339> # evaluate deadlines at a fixed instant
//!
//! The constants table defaults to the current regulation; set STATUTORY_TABLE
//! to a JSON file to override it. Exit status 2 means the check could not run.

use std::env;
use std::fs;
use std::process;

use chrono::{DateTime, Utc};
use suprimento_statutory::{check_request, telemetry, RequestInput, StatutoryConstants};

const TABLE_ENV: &str = "STATUTORY_TABLE";

fn fail(msg: String) -> ! {
    eprintln!("request-check: {}", msg);
    process::exit(2);
}

fn load_table() -> StatutoryConstants {
    match env::var(TABLE_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            tracing::info!(path = %path, "loading statutory table");
            StatutoryConstants::load(path.trim())
                .unwrap_or_else(|e| fail(format!("cannot load {}: {}", path, e)))
        }
        _ => StatutoryConstants::default(),
    }
}

fn load_request(path: &str) -> RequestInput {
    let contents = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("cannot read {}: {}", path, e)));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| fail(format!("invalid request JSON in {}: {}", path, e)))
}

fn parse_now(args: &[String]) -> DateTime<Utc> {
    match args.iter().position(|a| a == "--now") {
        Some(i) => {
            let raw = args
                .get(i + 1)
                .unwrap_or_else(|| fail("--now needs an RFC3339 timestamp".to_string()));
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|e| fail(format!("invalid --now {}: {}", raw, e)))
        }
        None => Utc::now(),
    }
}

fn main() {
    if let Err(e) = telemetry::init("warn") {
        eprintln!("request-check: {}", e);
    }

    let args: Vec<String> = env::args().collect();
    let quiet = args.iter().any(|a| a == "-q" || a == "--quiet");
    let now = parse_now(&args);
    let now_value = args
        .iter()
        .position(|a| a == "--now")
        .and_then(|i| args.get(i + 1));
    let files: Vec<_> = args
        .iter()
        .skip(1)
        .filter(|a| !a.starts_with('-') && Some(*a) != now_value)
        .collect();

    if files.len() != 1 {
        eprintln!("Usage: request-check <request.json> [-q|--quiet] [--now <rfc3339>]");
        eprintln!("  -q  Quiet: only exit code (0=valid, 1=invalid, 2=error)");
        process::exit(2);
    }

    let table = load_table();
    let request = load_request(files[0]);
    let report = check_request(&request, now, &table)
        .unwrap_or_else(|e| fail(format!("cannot check request: {}", e)));

    if !quiet {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(format!("cannot render report: {}", e)),
        }
    }

    process::exit(if report.valid { 0 } else { 1 });
}

//! CLI demo entry point.
//!
//! # Responsibility
//! - Seed a small roster through `academic_core` and print its report.
//! - Optionally start file logging from environment variables.
//!
//! Environment:
//! - `ACADEMIC_LOG_DIR`: absolute directory for log files; unset disables logging.
//! - `ACADEMIC_LOG_LEVEL`: trace|debug|info|warn|error, defaults per build mode.

use academic_core::{RecordResult, Roster, RosterReport};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "ACADEMIC_LOG_DIR";
const LOG_LEVEL_ENV: &str = "ACADEMIC_LOG_LEVEL";

fn main() -> ExitCode {
    if let Err(message) = start_logging() {
        eprintln!("academic_cli: {message}");
        return ExitCode::FAILURE;
    }

    let roster = match seed_roster() {
        Ok(roster) => roster,
        Err(err) => {
            log::error!("event=seed module=cli status=error error={err}");
            eprintln!("academic_cli: {err}");
            return ExitCode::FAILURE;
        }
    };

    let report = RosterReport::from_roster(&roster);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("academic_core version={}", academic_core::core_version());
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("academic_cli: failed to render report: {err}");
            ExitCode::FAILURE
        }
    }
}

fn start_logging() -> Result<(), String> {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return Ok(());
    };
    let level = std::env::var(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| academic_core::default_log_level().to_string());
    academic_core::init_logging(&level, &log_dir)
}

fn seed_roster() -> RecordResult<Roster> {
    let mut roster = Roster::new();
    let alice = roster.add_student("Alice");
    let bob = roster.add_student("Bob");
    let math = roster.add_course("Math");
    let physics = roster.add_course("Physics");

    let alice_math = roster.enroll(alice, math)?;
    let alice_physics = roster.enroll(alice, physics)?;
    let bob_math = roster.enroll(bob, math)?;

    roster.add_grade(alice, alice_math.id(), 90.0)?;
    roster.add_grade(alice, alice_physics.id(), 70.0)?;
    roster.add_grade(bob, bob_math.id(), 70.0)?;

    Ok(roster)
}

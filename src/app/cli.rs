// SPDX-License-Identifier: MPL-2.0
//! Command-line flags of the demo binary.
//!
//! Parsing never aborts: a malformed value or a stray argument is dropped and
//! reported as a warning, so `main` can log it once the logger is installed.

use crate::ui::notifications::Severity;
use std::path::PathBuf;

/// Values taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub duration_ms: Option<u64>,
    pub initial_severity: Option<Severity>,
}

/// Parses `--config <path>`, `--duration <ms>` and `--severity <name>`.
///
/// Returns the recognized values together with one warning per flag that
/// failed to parse and one for any unexpected leftover arguments.
pub fn parse(mut args: pico_args::Arguments) -> (CliArgs, Vec<String>) {
    let mut warnings = Vec::new();

    let config_path = accept(&mut warnings, "--config", args.opt_value_from_str("--config"));
    let duration_ms = accept(
        &mut warnings,
        "--duration",
        args.opt_value_from_str("--duration"),
    );
    let initial_severity = accept(
        &mut warnings,
        "--severity",
        args.opt_value_from_fn("--severity", |value| {
            Ok::<_, std::convert::Infallible>(Severity::from(value))
        }),
    );

    let leftovers = args.finish();
    if !leftovers.is_empty() {
        let leftovers: Vec<String> = leftovers
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        warnings.push(format!(
            "Ignoring unexpected arguments: {}",
            leftovers.join(" ")
        ));
    }

    (
        CliArgs {
            config_path,
            duration_ms,
            initial_severity,
        },
        warnings,
    )
}

fn accept<T>(
    warnings: &mut Vec<String>,
    flag: &str,
    result: Result<Option<T>, pico_args::Error>,
) -> Option<T> {
    result.unwrap_or_else(|err| {
        warnings.push(format!("Ignoring {flag}: {err}"));
        None
    })
}

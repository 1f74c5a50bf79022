//! Command line tool to encode, decode and render commit snapshots.
//!
//! ```text
//! commit-stats encode -g 42 -e sync_id=abc -e history_uuid --hex
//! commit-stats decode --hex --pretty < snapshot.hex
//! ```
//!
//! Logging goes to stderr and is controlled by `COMMIT_STATS_LOG`
//! (an `EnvFilter` directive, default `warn`).

mod commands;
mod format;
mod parse;
mod run;

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use commands::build_cli;
use parse::matches_to_action;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("COMMIT_STATS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = build_cli().get_matches();
    let result = matches_to_action(&matches).and_then(|action| {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run::execute(action, &mut stdin.lock(), &mut stdout.lock())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("(error) {e:#}");
            ExitCode::FAILURE
        }
    }
}

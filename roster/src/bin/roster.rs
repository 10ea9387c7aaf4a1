//! Replay a scripted roster session and print the resulting view.
//!
//! Configuration comes from `ROSTER_*` environment variables via
//! OrthoConfig; the flags below only choose the script and output shape.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use roster::runner::{RunError, load_settings, open_script, render_view, replay};
use roster::seed::build_roster;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `roster` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "roster",
    about = "Replay roster UI events from JSON lines and print the final view",
    version
)]
struct CliArgs {
    /// Event script path. Reads standard input when omitted.
    #[arg(long = "events", value_name = "path")]
    events: Option<PathBuf>,
    /// Print the view on one line.
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "roster run failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), RunError> {
    let settings = load_settings()?;
    let mut roster = build_roster(&settings)?;

    match &args.events {
        Some(path) => {
            replay(&mut roster, open_script(path)?)?;
        }
        None => {
            replay(&mut roster, io::stdin().lock())?;
        }
    }

    let rendered = render_view(&roster.view(), args.compact)?;
    writeln!(io::stdout().lock(), "{rendered}").map_err(|source| RunError::Write { source })
}

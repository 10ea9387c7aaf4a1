//! Scripted event replay for the `roster` binary.
//!
//! Scripts are newline-delimited JSON, one [`RosterEvent`] per line. Blank
//! lines and lines starting with `#` are skipped. Events are applied as they
//! are read, so a malformed line stops the replay with every earlier event
//! already applied.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use thiserror::Error;
use tracing::info;

use crate::config::RosterSettings;
use crate::domain::{RosterEvent, RosterView, SubmitOutcome, UserRoster};
use crate::seed::SeedLoadError;

/// Errors surfaced while running a script.
#[derive(Debug, Error)]
pub enum RunError {
    /// The starting list could not be resolved.
    #[error(transparent)]
    Seed(#[from] SeedLoadError),
    /// Configuration could not be loaded.
    #[error("configuration error: {source}")]
    Config {
        /// OrthoConfig loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// The script file could not be opened.
    #[error("failed to open events file {path}: {source}")]
    OpenScript {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The script could not be read.
    #[error("failed to read events: {source}")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A script line is not a valid event.
    #[error("invalid event on line {line}: {source}")]
    InvalidEvent {
        /// One-based line number.
        line: usize,
        /// JSON decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// The final view could not be encoded.
    #[error("failed to encode roster view: {source}")]
    Encode {
        /// JSON encoding error.
        #[source]
        source: serde_json::Error,
    },
    /// The final view could not be written.
    #[error("failed to write roster view: {source}")]
    Write {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Counts gathered while replaying a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events applied.
    pub events: usize,
    /// Submits that appended a record.
    pub added: usize,
    /// Submits that published errors.
    pub rejected: usize,
}

/// Load [`RosterSettings`] from configuration files and `ROSTER_*`
/// variables.
///
/// # Errors
///
/// Returns [`RunError::Config`] wrapping the loader error.
pub fn load_settings() -> Result<RosterSettings, RunError> {
    RosterSettings::load_from_iter([OsString::from("roster")])
        .map_err(|source| RunError::Config { source })
}

/// Open an event script for [`replay`].
///
/// # Errors
///
/// Returns [`RunError::OpenScript`] naming `path` when the file cannot be
/// opened.
pub fn open_script(path: &Path) -> Result<BufReader<File>, RunError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| RunError::OpenScript {
            path: path.to_path_buf(),
            source,
        })
}

/// Parse one script line, returning `None` for blank and comment lines.
///
/// # Errors
///
/// Returns the JSON error when the line is not a valid event.
pub fn parse_event_line(line: &str) -> Result<Option<RosterEvent>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}

/// Apply every event in `script` to `roster`.
///
/// # Errors
///
/// Returns [`RunError::Read`] on I/O failure and
/// [`RunError::InvalidEvent`] on the first malformed line.
///
/// # Examples
/// ```
/// use roster::UserRoster;
/// use roster::runner::replay;
///
/// let script = r#"
/// {"type":"edit","field":"email","value":"ann@example.com"}
/// {"type":"edit","field":"phone","value":"5551234567"}
/// {"type":"submit"}
/// "#;
/// let mut roster = UserRoster::new(&[]);
/// let summary = replay(&mut roster, script.as_bytes()).expect("replay");
/// assert_eq!(summary.rejected, 1);
/// ```
pub fn replay(roster: &mut UserRoster, script: impl BufRead) -> Result<ReplaySummary, RunError> {
    let mut summary = ReplaySummary::default();
    for (index, line) in script.lines().enumerate() {
        let line = line.map_err(|source| RunError::Read { source })?;
        let Some(event) = parse_event_line(&line).map_err(|source| RunError::InvalidEvent {
            line: index + 1,
            source,
        })?
        else {
            continue;
        };

        summary.events += 1;
        match roster.apply(event) {
            Some(SubmitOutcome::Added(_)) => summary.added += 1,
            Some(SubmitOutcome::Rejected) => summary.rejected += 1,
            None => {}
        }
    }

    info!(
        events = summary.events,
        added = summary.added,
        rejected = summary.rejected,
        users = roster.users().len(),
        "event script replayed"
    );
    Ok(summary)
}

/// Encode a view as JSON, pretty-printed unless `compact` is set.
///
/// # Errors
///
/// Returns [`RunError::Encode`] if serialization fails.
pub fn render_view(view: &RosterView, compact: bool) -> Result<String, RunError> {
    let encoded = if compact {
        serde_json::to_string(view)
    } else {
        serde_json::to_string_pretty(view)
    };
    encoded.map_err(|source| RunError::Encode { source })
}

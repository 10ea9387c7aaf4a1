//! Starting list resolution.
//!
//! A roster starts from the built-in two-user seed, from a JSON seed file,
//! or from a batch generated by the `example-data` crate.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::config::RosterSettings;
use crate::domain::{UserList, UserRecord, UserRoster};

/// Errors returned while resolving the starting list.
#[derive(Debug, Error)]
pub enum SeedLoadError {
    /// A seed file and a generated user count were both configured.
    #[error("both seed file {path} and {count} generated users were requested")]
    ConflictingSources {
        /// Configured seed file.
        path: PathBuf,
        /// Configured generated user count.
        count: usize,
    },
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    ReadSeedFile {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The seed file is not a JSON array of users.
    #[error("invalid seed file {path}: {source}")]
    ParseSeedFile {
        /// Path to the seed file.
        path: PathBuf,
        /// JSON decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// User generation failed.
    #[cfg(feature = "example-data")]
    #[error("example data generation error: {0}")]
    Generation(#[from] example_data::GenerationError),
    /// Generated users were requested but example data support is not built in.
    #[error("{count} generated users requested but the example-data feature is disabled")]
    ExampleDataDisabled {
        /// Requested user count.
        count: usize,
    },
}

/// The two users every fresh roster starts with.
#[must_use]
pub fn default_seed() -> Vec<UserRecord> {
    vec![
        UserRecord::new("John Doe", "john.doe@example.com", "123-456-7890"),
        UserRecord::new("Jane Doe", "jane.doe@example.com", "098-765-4321"),
    ]
}

/// Read a JSON array of users from `path`.
///
/// Records are taken as written; they are not validated.
///
/// # Errors
///
/// Returns [`SeedLoadError::ReadSeedFile`] or
/// [`SeedLoadError::ParseSeedFile`], both carrying the path.
pub fn load_seed_file(path: &Path) -> Result<Vec<UserRecord>, SeedLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| SeedLoadError::ReadSeedFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| SeedLoadError::ParseSeedFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the starting list described by `settings`.
///
/// Seed records are not validated; duplicate emails are logged and kept.
///
/// # Errors
///
/// Returns [`SeedLoadError`] when the configured source cannot be loaded or
/// when more than one source is configured.
///
/// # Examples
/// ```
/// use roster::RosterSettings;
/// use roster::seed::load_seed_users;
///
/// let settings = RosterSettings {
///     seed_file: None,
///     generated_users: None,
///     generator_seed: None,
///     accept_formatted_phone: false,
///     unique_emails: false,
/// };
/// let users = load_seed_users(&settings).expect("built-in seed");
/// assert_eq!(users.len(), 2);
/// ```
pub fn load_seed_users(settings: &RosterSettings) -> Result<Vec<UserRecord>, SeedLoadError> {
    let users = match (&settings.seed_file, settings.generated_users) {
        (Some(path), Some(count)) => {
            return Err(SeedLoadError::ConflictingSources {
                path: path.clone(),
                count,
            });
        }
        (Some(path), None) => {
            let users = load_seed_file(path)?;
            info!(path = %path.display(), user_count = users.len(), "loaded seed file");
            users
        }
        (None, Some(count)) => generate_users(settings.generator_seed(), count)?,
        (None, None) => {
            info!(seed = "built-in", "using default seed users");
            default_seed()
        }
    };

    let list = UserList::from_seed(&users);
    for email in list.duplicate_emails() {
        warn!(email, "seed contains duplicate email; keeping every record");
    }

    Ok(users)
}

/// Build a roster from `settings`: starting list plus validation policy.
///
/// # Errors
///
/// Returns [`SeedLoadError`] when the starting list cannot be resolved.
pub fn build_roster(settings: &RosterSettings) -> Result<UserRoster, SeedLoadError> {
    let users = load_seed_users(settings)?;
    Ok(UserRoster::with_policy(&users, settings.policy()))
}

#[cfg(feature = "example-data")]
fn generate_users(seed: u64, count: usize) -> Result<Vec<UserRecord>, SeedLoadError> {
    let users: Vec<UserRecord> = example_data::generate_example_users(seed, count)?
        .into_iter()
        .map(UserRecord::from)
        .collect();
    info!(seed, user_count = users.len(), "generated seed users");
    Ok(users)
}

#[cfg(not(feature = "example-data"))]
fn generate_users(_seed: u64, count: usize) -> Result<Vec<UserRecord>, SeedLoadError> {
    Err(SeedLoadError::ExampleDataDisabled { count })
}

//! Roster configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{PhoneFormat, ValidationPolicy};

/// Generator seed used when only a user count is configured.
pub const DEFAULT_GENERATOR_SEED: u64 = 2026;

/// Configuration values controlling the starting list and validation policy.
///
/// Every value can be set through `ROSTER_*` environment variables or a
/// configuration file. With neither a seed file nor a generated user count
/// the built-in two-user seed is used.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct RosterSettings {
    /// JSON file holding the starting users.
    pub seed_file: Option<PathBuf>,
    /// Start from this many generated example users.
    pub generated_users: Option<usize>,
    /// Seed for generated users.
    pub generator_seed: Option<u64>,
    /// Let `(XXX) XXX-XXXX` phones pass validation.
    #[ortho_config(default = false)]
    pub accept_formatted_phone: bool,
    /// Reject drafts whose email is already listed.
    #[ortho_config(default = false)]
    pub unique_emails: bool,
}

impl RosterSettings {
    /// Seed for generated users, falling back to [`DEFAULT_GENERATOR_SEED`].
    pub fn generator_seed(&self) -> u64 {
        self.generator_seed.unwrap_or(DEFAULT_GENERATOR_SEED)
    }

    /// Validation policy described by these settings.
    pub const fn policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            phone_format: if self.accept_formatted_phone {
                PhoneFormat::AcceptFormatted
            } else {
                PhoneFormat::Digits
            },
            unique_emails: self.unique_emails,
        }
    }
}

//! Errors raised while generating example users.

use thiserror::Error;

/// Why a batch of example users could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A batch must hold at least one user.
    #[error("user count must be at least 1")]
    ZeroUserCount,

    /// Every numbered variant of an address was already taken.
    #[error("no unused email for '{local_part}' after {attempts} attempts")]
    EmailsExhausted {
        /// Local part derived from the user's name.
        local_part: String,
        /// Candidates tried before giving up.
        attempts: usize,
    },
}

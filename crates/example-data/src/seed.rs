//! Generated user seed types.
//!
//! These types are independent of the roster's domain types to avoid
//! circular dependencies.

use serde::{Deserialize, Serialize};

/// A generated example user record.
///
/// Mirrors the roster's `UserRecord` shape and is converted into it at the
/// point of use.
///
/// # Example
///
/// ```
/// use example_data::ExampleUserSeed;
///
/// let user = ExampleUserSeed {
///     name: "Ada Lovelace".to_owned(),
///     email: "ada.lovelace@example.com".to_owned(),
///     phone: "5551234567".to_owned(),
/// };
///
/// assert_eq!(user.name, "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleUserSeed {
    /// Human-readable full name.
    pub name: String,
    /// Email address, unique within one generated batch.
    pub email: String,
    /// Ten bare digits.
    pub phone: String,
}

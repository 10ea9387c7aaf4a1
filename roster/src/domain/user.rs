//! User record model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A committed roster entry.
///
/// Records are immutable once built; the roster only ever appends or removes
/// whole records. No validation happens here: seed data is accepted as
/// supplied and drafts are checked by
/// [`ValidationPolicy`](crate::domain::ValidationPolicy) before they become
/// records.
///
/// # Examples
/// ```
/// use roster::domain::UserRecord;
///
/// let user = UserRecord::new("John Doe", "john.doe@example.com", "123-456-7890");
/// assert_eq!(user.email(), "john.doe@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRecord {
    name: String,
    email: String,
    phone: String,
}

impl UserRecord {
    /// Build a record from its three fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Full name as entered.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address; the removal key.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Phone number as stored.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Read one field by name.
    #[must_use]
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Phone => &self.phone,
        }
    }
}

#[cfg(feature = "example-data")]
impl From<example_data::ExampleUserSeed> for UserRecord {
    fn from(value: example_data::ExampleUserSeed) -> Self {
        let example_data::ExampleUserSeed { name, email, phone } = value;
        Self { name, email, phone }
    }
}

/// The editable fields of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserField {
    /// Full name.
    Name,
    /// Email address.
    Email,
    /// Phone number.
    Phone,
}

impl UserField {
    /// Every field in display order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Phone];

    /// Lowercase field name used in events and error payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a [`UserField`] from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown user field '{0}'; expected name, email, or phone")]
pub struct UnknownFieldError(pub String);

impl FromStr for UserField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_owned()))
    }
}

//! The in-progress "new user" form state.

use serde::{Deserialize, Serialize};

use super::phone::format_phone;
use super::user::{UserField, UserRecord};

/// Mutable staging record for the next user.
///
/// A draft always exists; after a successful submit it is reset to empty
/// strings. Edits to the phone field pass through [`format_phone`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    name: String,
    email: String,
    phone: String,
}

impl Draft {
    /// Build a draft holding the given values verbatim.
    ///
    /// Unlike [`Draft::update_field`], the phone is not reformatted.
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

    /// Overwrite one field with a raw input value.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::{Draft, UserField};
    ///
    /// let mut draft = Draft::default();
    /// draft.update_field(UserField::Phone, "555123456");
    /// assert_eq!(draft.phone(), "555123456");
    /// draft.update_field(UserField::Phone, "5551234567");
    /// assert_eq!(draft.phone(), "(555) 123-4567");
    /// ```
    pub fn update_field(&mut self, field: UserField, raw: impl Into<String>) {
        let raw = raw.into();
        match field {
            UserField::Name => self.name = raw,
            UserField::Email => self.email = raw,
            UserField::Phone => self.phone = format_phone(&raw),
        }
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
    }

    /// Whether every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }

    /// Current name value.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current email value.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current phone value.
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

    pub(crate) fn to_record(&self, phone: String) -> UserRecord {
        UserRecord::new(self.name.clone(), self.email.clone(), phone)
    }
}

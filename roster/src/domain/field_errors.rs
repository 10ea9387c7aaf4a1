//! Per-field validation messages.

use serde::{Deserialize, Serialize};

use super::user::UserField;

/// One message slot per field; an empty string means the field passed.
///
/// Built wholesale by every validation attempt, so a field that passes
/// always reads as empty regardless of earlier failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    name: String,
    email: String,
    phone: String,
}

impl FieldErrors {
    /// Message for one field, empty when it passed.
    #[must_use]
    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Phone => &self.phone,
        }
    }

    /// Message for the name field.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Message for the email field.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Message for the phone field.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Whether no field carries a message.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        UserField::ALL.into_iter().all(|field| self.get(field).is_empty())
    }

    /// Fields that carry a message, in display order.
    pub fn failing_fields(&self) -> impl Iterator<Item = UserField> + '_ {
        UserField::ALL
            .into_iter()
            .filter(|field| !self.get(*field).is_empty())
    }

    pub(crate) fn set(&mut self, field: UserField, message: impl Into<String>) {
        let slot = match field {
            UserField::Name => &mut self.name,
            UserField::Email => &mut self.email,
            UserField::Phone => &mut self.phone,
        };
        *slot = message.into();
    }
}

//! The user roster component: list store plus draft validator.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::draft::Draft;
use super::field_errors::FieldErrors;
use super::list_store::UserList;
use super::user::{UserField, UserRecord};
use super::validation::{EMAIL_TAKEN, ValidationPolicy};

/// Result of [`UserRoster::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was accepted and appended; the draft is now empty.
    Added(UserRecord),
    /// At least one field failed; errors are published and the draft kept.
    Rejected,
}

impl SubmitOutcome {
    /// Whether the submit appended a record.
    #[must_use]
    pub const fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

/// A UI event the roster reacts to.
///
/// Serialized with an internal `type` tag so hosts can script sessions as
/// JSON lines:
///
/// ```
/// use roster::domain::{RosterEvent, UserField};
///
/// let event: RosterEvent =
///     serde_json::from_str(r#"{"type":"edit","field":"phone","value":"555"}"#).unwrap();
/// assert_eq!(
///     event,
///     RosterEvent::Edit { field: UserField::Phone, value: "555".to_owned() }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RosterEvent {
    /// A keystroke or paste into one draft field.
    Edit {
        /// Field being edited.
        field: UserField,
        /// Full raw value of the input after the edit.
        value: String,
    },
    /// The add button.
    Submit,
    /// A row's delete button.
    Remove {
        /// Email of the row to delete.
        email: String,
    },
}

/// Owned snapshot of everything a view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterView {
    /// Rows in display order.
    pub users: UserList,
    /// Current input values.
    pub draft: Draft,
    /// Inline error messages.
    pub errors: FieldErrors,
}

/// One editable user list with its new-user form.
///
/// All state is owned by the instance and mutated through `&mut self`; views
/// read it through [`UserRoster::users`], [`UserRoster::draft`], and
/// [`UserRoster::errors`].
///
/// # Examples
/// ```
/// use roster::domain::{UserField, UserRoster};
///
/// let mut roster = UserRoster::new(&[]);
/// roster.update_field(UserField::Name, "Ann");
/// roster.update_field(UserField::Email, "ann@example.com");
/// roster.update_field(UserField::Phone, "555123456");
/// assert!(!roster.submit().is_added());
/// assert_eq!(roster.errors().phone(), "phone must be exactly 10 digits");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UserRoster {
    users: UserList,
    draft: Draft,
    errors: FieldErrors,
    policy: ValidationPolicy,
}

impl UserRoster {
    /// Build a roster seeded with a copy of `seed`, using the default policy.
    #[must_use]
    pub fn new(seed: &[UserRecord]) -> Self {
        Self::with_policy(seed, ValidationPolicy::default())
    }

    /// Build a roster seeded with a copy of `seed` and a custom policy.
    #[must_use]
    pub fn with_policy(seed: &[UserRecord], policy: ValidationPolicy) -> Self {
        Self {
            users: UserList::from_seed(seed),
            draft: Draft::default(),
            errors: FieldErrors::default(),
            policy,
        }
    }

    /// Append a record directly, bypassing validation.
    pub fn append(&mut self, record: UserRecord) {
        info!(email = record.email(), "user appended");
        self.users.append(record);
    }

    /// Delete the first row with this email. Unknown emails are ignored.
    pub fn remove(&mut self, email: &str) -> Option<UserRecord> {
        let removed = self.users.remove(email);
        if removed.is_some() {
            info!(email, remaining = self.users.len(), "user removed");
        } else {
            debug!(email, "remove ignored; no matching user");
        }
        removed
    }

    /// Overwrite one draft field; phone values may be reformatted.
    pub fn update_field(&mut self, field: UserField, raw: impl Into<String>) {
        self.draft.update_field(field, raw);
        debug!(%field, "draft field updated");
    }

    /// Load a whole draft as-is, for example when restoring a saved form.
    ///
    /// Unlike [`UserRoster::update_field`], values are stored verbatim: a
    /// bare ten-digit phone stays bare. Published errors are left alone until
    /// the next submit.
    pub fn replace_draft(&mut self, draft: Draft) {
        self.draft = draft;
        debug!("draft replaced");
    }

    /// Validate the current draft without committing it.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when the draft fails a rule, or when
    /// uniqueness is enforced and the email is already listed.
    pub fn validate(&self) -> Result<UserRecord, FieldErrors> {
        let record = self.policy.validate(&self.draft)?;
        if self.policy.unique_emails && self.users.contains_email(record.email()) {
            let mut errors = FieldErrors::default();
            errors.set(UserField::Email, EMAIL_TAKEN);
            return Err(errors);
        }
        Ok(record)
    }

    /// Commit the draft if it validates.
    ///
    /// On success the record is appended, the draft is cleared, and the
    /// published errors are cleared. On failure the errors are published and
    /// the draft is left as typed.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.validate() {
            Ok(record) => {
                self.append(record.clone());
                self.draft.clear();
                self.errors = FieldErrors::default();
                SubmitOutcome::Added(record)
            }
            Err(errors) => {
                let failing: Vec<_> = errors.failing_fields().map(UserField::as_str).collect();
                debug!(fields = ?failing, "draft rejected");
                self.errors = errors;
                SubmitOutcome::Rejected
            }
        }
    }

    /// Dispatch one UI event.
    ///
    /// Returns the submit outcome for [`RosterEvent::Submit`] and `None`
    /// otherwise.
    pub fn apply(&mut self, event: RosterEvent) -> Option<SubmitOutcome> {
        match event {
            RosterEvent::Edit { field, value } => {
                self.update_field(field, value);
                None
            }
            RosterEvent::Submit => Some(self.submit()),
            RosterEvent::Remove { email } => {
                self.remove(&email);
                None
            }
        }
    }

    /// Current rows.
    #[must_use]
    pub const fn users(&self) -> &UserList {
        &self.users
    }

    /// Current draft values.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Errors from the last submit.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Active validation policy.
    #[must_use]
    pub const fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Owned snapshot of the three read projections.
    #[must_use]
    pub fn view(&self) -> RosterView {
        RosterView {
            users: self.users.clone(),
            draft: self.draft.clone(),
            errors: self.errors.clone(),
        }
    }
}

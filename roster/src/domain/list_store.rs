//! Ordered user list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::user::UserRecord;

/// Insertion-ordered collection of committed records.
///
/// ## Invariants
/// - New records always land at the end.
/// - Removal preserves the relative order of the remaining records.
///
/// The list itself does not enforce email uniqueness; the roster's submit
/// path decides that according to its
/// [`ValidationPolicy`](crate::domain::ValidationPolicy).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserList(Vec<UserRecord>);

impl UserList {
    /// Build a list holding a copy of the seed records, in order.
    #[must_use]
    pub fn from_seed(seed: &[UserRecord]) -> Self {
        Self(seed.to_vec())
    }

    /// Push a record onto the end of the list.
    pub fn append(&mut self, record: UserRecord) {
        self.0.push(record);
    }

    /// Remove the first record whose email equals `email`.
    ///
    /// Returns the removed record, or `None` when no record matches; an
    /// absent key leaves the list untouched.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::{UserList, UserRecord};
    ///
    /// let mut list = UserList::from_seed(&[
    ///     UserRecord::new("John Doe", "john.doe@example.com", "123-456-7890"),
    ///     UserRecord::new("Jane Doe", "jane.doe@example.com", "098-765-4321"),
    /// ]);
    /// let removed = list.remove("jane.doe@example.com");
    /// assert_eq!(removed.map(|r| r.name().to_owned()).as_deref(), Some("Jane Doe"));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn remove(&mut self, email: &str) -> Option<UserRecord> {
        let index = self.0.iter().position(|record| record.email() == email)?;
        Some(self.0.remove(index))
    }

    /// Whether any record has this email.
    #[must_use]
    pub fn contains_email(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    /// First record with this email.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.0.iter().find(|record| record.email() == email)
    }

    /// Emails that appear more than once, each reported once in first-seen
    /// order.
    #[must_use]
    pub fn duplicate_emails(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.0.len());
        let mut reported = HashSet::new();
        self.0
            .iter()
            .map(UserRecord::email)
            .filter(|email| !seen.insert(*email) && reported.insert(*email))
            .collect()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> {
        self.0.iter()
    }

    /// Records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[UserRecord] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a UserList {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<UserRecord>> for UserList {
    fn from(value: Vec<UserRecord>) -> Self {
        Self(value)
    }
}

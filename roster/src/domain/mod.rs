//! Domain primitives for the user roster.
//!
//! Purpose: hold the list of committed users and the validated new-user
//! draft. Nothing here performs I/O; hosts drive the roster through
//! [`UserRoster`] and render its read projections.

mod draft;
mod field_errors;
mod list_store;
mod phone;
mod roster;
mod user;
pub mod validation;

pub use self::draft::Draft;
pub use self::field_errors::FieldErrors;
pub use self::list_store::UserList;
pub use self::phone::{digits_from_formatted, format_phone, is_bare_phone};
pub use self::roster::{RosterEvent, RosterView, SubmitOutcome, UserRoster};
pub use self::user::{UnknownFieldError, UserField, UserRecord};
pub use self::validation::{PhoneFormat, ValidationPolicy, validate};

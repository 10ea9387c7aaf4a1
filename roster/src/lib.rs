//! Editable in-memory user roster with draft validation.
//!
//! The [`domain`] module holds the component itself. [`config`] and
//! [`seed`] resolve the starting list and validation policy for a host, and
//! [`runner`] replays scripted UI events for the bundled CLI.

pub mod config;
pub mod domain;
pub mod runner;
pub mod seed;

pub use config::RosterSettings;
pub use domain::{UserRecord, UserRoster};

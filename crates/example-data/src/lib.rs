//! Reproducible example users for starting a roster.
//!
//! [`generate_example_users`] turns a `u64` seed and a count into a list of
//! [`ExampleUserSeed`] records. The crate knows nothing about the roster;
//! records are plain data converted where they are used.
//!
//! ```
//! use example_data::generate_example_users;
//!
//! let users = generate_example_users(2026, 2).expect("generated");
//! assert!(users.iter().all(|user| user.phone.len() == 10));
//! ```

mod error;
mod generator;
mod seed;

pub use error::GenerationError;
pub use generator::generate_example_users;
pub use seed::ExampleUserSeed;

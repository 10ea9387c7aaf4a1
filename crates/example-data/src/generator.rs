//! Seeded generation of contact records.
//!
//! Output depends only on the seed and the count, so a roster started from
//! generated users looks the same on every run.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::seed::ExampleUserSeed;

const MAX_EMAIL_ATTEMPTS: usize = 100;

/// Reserved documentation domains, see RFC 2606.
const EMAIL_DOMAINS: [&str; 3] = ["example.com", "example.org", "example.net"];

const FALLBACK_LOCAL_PART: &str = "user";

const PHONE_DIGITS: usize = 10;

/// Generate `count` users from `seed`.
///
/// Each user gets an English first and last name, an address of the form
/// `first.last@example.com` (a number is appended on collision, so emails
/// are unique within the batch) and ten bare digits as phone, never starting
/// with `0` or `1`. Emails use only lowercase ASCII letters, digits, and
/// single dots in the local part.
///
/// # Errors
///
/// Returns [`GenerationError::ZeroUserCount`] for an empty batch and
/// [`GenerationError::EmailsExhausted`] when a name collides too often.
///
/// # Example
///
/// ```
/// use example_data::generate_example_users;
///
/// let users = generate_example_users(42, 3).expect("generated");
/// assert_eq!(users.len(), 3);
/// assert_eq!(users, generate_example_users(42, 3).expect("generated"));
/// ```
pub fn generate_example_users(
    seed: u64,
    count: usize,
) -> Result<Vec<ExampleUserSeed>, GenerationError> {
    if count == 0 {
        return Err(GenerationError::ZeroUserCount);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut taken = HashSet::with_capacity(count);
    (0..count)
        .map(|_| generate_user(&mut rng, &mut taken))
        .collect()
}

fn generate_user(
    rng: &mut ChaCha8Rng,
    taken: &mut HashSet<String>,
) -> Result<ExampleUserSeed, GenerationError> {
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or("example.com");
    let email = unused_email(&local_part(&first, &last), domain, taken)?;

    Ok(ExampleUserSeed {
        name: format!("{first} {last}"),
        email,
        phone: phone_number(rng),
    })
}

/// `first.last`, lowercased, keeping ASCII letters and digits only.
fn local_part(first: &str, last: &str) -> String {
    let parts: Vec<String> = [first, last]
        .iter()
        .map(|part| {
            part.chars()
                .filter(char::is_ascii_alphanumeric)
                .map(|c| c.to_ascii_lowercase())
                .collect::<String>()
        })
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        FALLBACK_LOCAL_PART.to_owned()
    } else {
        parts.join(".")
    }
}

fn unused_email(
    local: &str,
    domain: &str,
    taken: &mut HashSet<String>,
) -> Result<String, GenerationError> {
    for attempt in 1..=MAX_EMAIL_ATTEMPTS {
        let candidate = if attempt == 1 {
            format!("{local}@{domain}")
        } else {
            format!("{local}{attempt}@{domain}")
        };
        if taken.insert(candidate.clone()) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::EmailsExhausted {
        local_part: local.to_owned(),
        attempts: MAX_EMAIL_ATTEMPTS,
    })
}

fn phone_number(rng: &mut ChaCha8Rng) -> String {
    let first = rng.random_range(b'2'..=b'9');
    std::iter::once(first)
        .chain((1..PHONE_DIGITS).map(|_| rng.random_range(b'0'..=b'9')))
        .map(char::from)
        .collect()
}

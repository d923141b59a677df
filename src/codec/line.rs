//! The "mandaravadri" line format
//!
//! A flat, human-authored format for user records:
//!
//! ```text
//! id: 3, name: Amy, email: a@x.com, hashed_password: h1
//! ```
//!
//! Parsing is forward-compatible: unrecognized keys are ignored and a field
//! that does not split into `key: value` is skipped rather than rejected.
//! Only users have a line representation; tasks and categories are stored as
//! structured records.

use crate::error::{VaultError, VaultResult};
use crate::models::{User, UserId};

/// Render a user as a single mandaravadri line (no trailing newline)
pub fn encode_user(user: &User) -> String {
    format!(
        "id: {}, name: {}, email: {}, hashed_password: {}",
        user.id, user.name, user.email, user.hashed_password
    )
}

/// Parse a mandaravadri line into a user.
///
/// A record is accepted only if name, email, and hashed_password all came
/// through non-empty; a present-but-non-numeric id is an error.
pub fn parse_user(line: &str) -> VaultResult<User> {
    let line = line.trim();
    if line.is_empty() {
        return Err(VaultError::IncompleteRecord("empty user line".into()));
    }

    let mut id = UserId::new(0);
    let mut name = String::new();
    let mut email = String::new();
    let mut hashed_password = String::new();

    for field in line.split(',') {
        let mut parts = field.trim().splitn(2, ": ");
        let (key, value) = match (parts.next(), parts.next()) {
            (Some(key), Some(value)) => (key, value),
            _ => continue,
        };

        match key {
            "id" => {
                id = value.parse().map_err(|_| VaultError::MalformedField {
                    field: "id",
                    value: value.to_string(),
                })?;
            }
            "name" => name = value.to_string(),
            "email" => email = value.to_string(),
            "hashed_password" => hashed_password = value.to_string(),
            _ => {}
        }
    }

    if name.is_empty() || email.is_empty() || hashed_password.is_empty() {
        return Err(VaultError::IncompleteRecord(
            "user line is missing name, email, or hashed_password".into(),
        ));
    }

    Ok(User {
        id,
        name,
        email,
        hashed_password,
    })
}

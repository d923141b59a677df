//! Record codecs
//!
//! Every entity is persisted as one line of text. Two encodings exist: the
//! structured encoding (one JSON document per line) and the bespoke
//! mandaravadri line format, which is defined for users only. The active
//! codec is chosen once at startup from the serialization mode and threaded
//! into the stores as a plain value.

pub mod line;

use serde::{de::DeserializeOwned, Serialize};

use crate::config::SerializationMode;
use crate::error::{VaultError, VaultResult};
use crate::models::{Category, Task, User};

/// An entity that can be persisted as a single line of text.
///
/// The line-format hooks default to `UnsupportedFormat`; only entities with
/// a defined line representation override them.
pub trait Record: Serialize + DeserializeOwned + Sized {
    /// Entity name used in error messages
    const KIND: &'static str;

    /// Render this record in the mandaravadri line format
    fn encode_line(&self) -> VaultResult<String> {
        Err(VaultError::UnsupportedFormat {
            entity_type: Self::KIND,
        })
    }

    /// Parse a record from the mandaravadri line format
    fn decode_line(_line: &str) -> VaultResult<Self> {
        Err(VaultError::UnsupportedFormat {
            entity_type: Self::KIND,
        })
    }
}

impl Record for User {
    const KIND: &'static str = "User";

    fn encode_line(&self) -> VaultResult<String> {
        Ok(line::encode_user(self))
    }

    fn decode_line(line: &str) -> VaultResult<Self> {
        line::parse_user(line)
    }
}

impl Record for Category {
    const KIND: &'static str = "Category";
}

impl Record for Task {
    const KIND: &'static str = "Task";
}

/// One of the two line encodings, selected process-wide at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// One self-describing JSON document per line
    Structured,
    /// The mandaravadri `key: value, ...` format
    Line,
}

impl Codec {
    /// The codec for a resolved serialization mode
    pub fn for_mode(mode: SerializationMode) -> Self {
        match mode {
            SerializationMode::Json => Self::Structured,
            SerializationMode::Mandaravadri => Self::Line,
        }
    }

    /// Encode a record as a single line (no trailing newline)
    pub fn encode<R: Record>(&self, record: &R) -> VaultResult<String> {
        match self {
            Self::Structured => Ok(serde_json::to_string(record)?),
            Self::Line => record.encode_line(),
        }
    }

    /// Decode a record from a single line
    pub fn decode<R: Record>(&self, line: &str) -> VaultResult<R> {
        match self {
            Self::Structured => serde_json::from_str(line)
                .map_err(|e| VaultError::MalformedRecord(e.to_string())),
            Self::Line => R::decode_line(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, TaskId, UserId};

    #[test]
    fn test_structured_round_trip_user() {
        let user = User::new(UserId::new(1), "Amy", "a@x.com", "h1");
        let encoded = Codec::Structured.encode(&user).unwrap();
        let decoded: User = Codec::Structured.decode(&encoded).unwrap();
        assert_eq!(user, decoded);
    }

    #[test]
    fn test_structured_round_trip_task_and_category() {
        let category = Category::new(CategoryId::new(1), "Chores", "green", UserId::new(1));
        let encoded = Codec::Structured.encode(&category).unwrap();
        let decoded: Category = Codec::Structured.decode(&encoded).unwrap();
        assert_eq!(category, decoded);

        let task = Task::new(
            TaskId::new(1),
            "Water plants",
            "2026-09-01",
            CategoryId::new(1),
            UserId::new(1),
        );
        let encoded = Codec::Structured.encode(&task).unwrap();
        let decoded: Task = Codec::Structured.decode(&encoded).unwrap();
        assert_eq!(task, decoded);
    }

    #[test]
    fn test_line_round_trip_user() {
        let user = User::new(UserId::new(2), "Ben", "b@x.com", "h2");
        let encoded = Codec::Line.encode(&user).unwrap();
        let decoded: User = Codec::Line.decode(&encoded).unwrap();
        assert_eq!(user, decoded);
    }

    #[test]
    fn test_line_format_unsupported_for_tasks_and_categories() {
        let task = Task::new(
            TaskId::new(1),
            "t",
            "d",
            CategoryId::new(1),
            UserId::new(1),
        );
        let err = Codec::Line.encode(&task).unwrap_err();
        assert!(matches!(
            err,
            VaultError::UnsupportedFormat { entity_type: "Task" }
        ));

        let err = Codec::Line.decode::<Category>("anything").unwrap_err();
        assert!(matches!(
            err,
            VaultError::UnsupportedFormat {
                entity_type: "Category"
            }
        ));
    }

    #[test]
    fn test_structured_decode_rejects_garbage() {
        let err = Codec::Structured.decode::<User>("{not json").unwrap_err();
        assert!(matches!(err, VaultError::MalformedRecord(_)));
    }

    #[test]
    fn test_codec_for_mode() {
        assert_eq!(
            Codec::for_mode(SerializationMode::Mandaravadri),
            Codec::Line
        );
        assert_eq!(Codec::for_mode(SerializationMode::Json), Codec::Structured);
    }
}

//! Process configuration for TaskVault
//!
//! The only runtime knob is the serialization mode for the users file. It is
//! resolved once at startup and threaded into the storage layer as a value;
//! nothing re-reads it per call.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which on-disk encoding the users file uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SerializationMode {
    /// The bespoke `key: value, ...` line format (default)
    #[default]
    Mandaravadri,
    /// One JSON document per line
    Json,
}

impl SerializationMode {
    /// The flag value for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mandaravadri => "mandaravadri",
            Self::Json => "json",
        }
    }

    /// Resolve a `--serialize-mode` flag value.
    ///
    /// Returns the mode plus whether the value was unrecognized. An
    /// unrecognized value falls back to JSON; the caller is expected to warn,
    /// not abort.
    pub fn resolve(flag: &str) -> (Self, bool) {
        match flag {
            "mandaravadri" => (Self::Mandaravadri, false),
            "json" => (Self::Json, false),
            _ => (Self::Json, true),
        }
    }
}

impl fmt::Display for SerializationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::VaultPaths;
pub use settings::SerializationMode;

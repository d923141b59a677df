//! TaskVault - Terminal-based task tracker with flat-file persistence
//!
//! This library provides the core functionality for the TaskVault task
//! tracker: users register and sign in, create categories and tasks, and
//! list the tasks that belong to them. State lives in memory and is
//! mirrored to flat text files so it survives restarts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and the serialization-mode setting
//! - `error`: Custom error types
//! - `models`: Core data models (users, categories, tasks)
//! - `codec`: The two per-line record encodings
//! - `auth`: Password hashing and the session
//! - `storage`: Line-file storage layer
//! - `cli`: The interactive command shell
//! - `display`: Terminal output formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use taskvault::config::{SerializationMode, VaultPaths};
//! use taskvault::storage::Storage;
//!
//! let mut storage = Storage::new(VaultPaths::new(), SerializationMode::Mandaravadri);
//! storage.load_all()?;
//! ```

pub mod auth;
pub mod cli;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::VaultError;

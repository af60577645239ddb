//! Shelf Storefront library.
//!
//! Everything the `shelf` shell needs beyond the pure domain types:
//!
//! - [`config`] - Data file locations from the environment
//! - [`storage`] - Whole-file JSON persistence with degrade-to-empty reads
//! - [`state`] - The explicit session state and its actions
//! - [`error`] - Storage and user-facing action errors
//!
//! All I/O is blocking and runs on the caller's thread.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod state;
pub mod storage;

pub use config::{ConfigError, StorefrontConfig};
pub use error::{ActionError, StorageError};
pub use state::Session;
pub use storage::Storage;

//! Error types for persistence and user actions.
//!
//! Storage errors never reach the presentation layer: the persistence
//! boundary logs them and degrades to an empty result. Action errors are
//! user-facing and are shown as informational messages.

use std::path::PathBuf;

use shelf_core::ProductId;
use thiserror::Error;

/// Failure reading or writing a data file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON for the expected type.
    #[error("malformed data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Value could not be serialized.
    #[error("failed to serialize data for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Temp file could not be renamed over the target.
    #[error("failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// The file the error concerns.
    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. }
            | Self::Parse { path, .. }
            | Self::Serialize { path, .. }
            | Self::Persist { path, .. } => path,
        }
    }
}

/// User-facing error from a session action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No product was selected.
    #[error("Please select a product first.")]
    NoSelection,

    /// The selected ID is not in the catalog.
    #[error("Product {0} is not in the catalog.")]
    UnknownProduct(ProductId),

    /// Checkout was requested with nothing in the cart.
    #[error("Your cart is empty.")]
    EmptyCart,

    /// The receipt could not be written, so the cart was kept.
    #[error("The receipt could not be saved; your cart has been kept.")]
    ReceiptNotSaved,
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
